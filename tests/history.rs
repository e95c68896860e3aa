use cell_history::{Entry, History, HistoryError, DEFAULT_CAPACITY};

fn snapshot(history: &History<char>) -> Vec<(char, usize)> {
    history.entries().map(|e| (e.cell_id, e.line)).collect()
}

#[test]
fn length_counts_non_repeated_visits() {
    let mut history = History::new();
    let visits = [('a', 1), ('a', 1), ('b', 1), ('b', 2), ('b', 2), ('a', 1)];
    for (cell, line) in visits {
        history.record(cell, line);
    }
    assert_eq!(history.len(), 4);
    assert_eq!(history.current(), Some(&Entry::new('a', 1)));
}

#[test]
fn keeps_newest_visits_up_to_capacity() {
    let mut history = History::new();
    for line in 0..DEFAULT_CAPACITY + 7 {
        history.record('a', line);
    }
    assert_eq!(history.len(), DEFAULT_CAPACITY);
    let lines: Vec<usize> = history.entries().map(|e| e.line).collect();
    assert_eq!(lines, (7..DEFAULT_CAPACITY + 7).collect::<Vec<_>>());
    assert_eq!(history.cursor(), Some(DEFAULT_CAPACITY - 1));
    assert_eq!(history.current(), Some(&Entry::new('a', DEFAULT_CAPACITY + 6)));
}

#[test]
fn custom_capacity() {
    let mut history = History::bounded(2).unwrap();
    history.record('a', 1);
    history.record('b', 1);
    history.record('c', 1);
    assert_eq!(snapshot(&history), vec![('b', 1), ('c', 1)]);
    assert_eq!(history.go_back(), Some(&Entry::new('b', 1)));
    assert!(matches!(
        History::<char>::bounded(0),
        Err(HistoryError::ZeroCapacity)
    ));
}

#[test]
fn new_visit_after_going_back_truncates_branch() {
    let mut history = History::new();
    history.record('A', 1);
    history.record('A', 2);
    history.go_back();
    history.record('A', 3);
    assert_eq!(snapshot(&history), vec![('A', 1), ('A', 3)]);
}

#[test]
fn cannot_go_back_when_fresh_or_reset() {
    let mut history: History<char> = History::default();
    assert!(!history.can_go_back());
    assert_eq!(history.go_back(), None);

    history.record('a', 1);
    assert!(history.can_go_back());
    history.reset();
    assert!(!history.can_go_back());
    assert_eq!(history.go_back(), None);
}

#[test]
fn going_back_past_the_start_stays_on_first_visit() {
    let mut history = History::new();
    let n = 5;
    for line in 0..n {
        history.record('a', line);
    }
    for _ in 0..n {
        history.go_back();
    }
    assert_eq!(history.cursor(), Some(0));
    for _ in 0..3 {
        assert_eq!(history.go_back(), Some(&Entry::new('a', 0)));
    }
}

#[test]
fn forget_removes_only_matching_cell() {
    let mut history = History::new();
    for (cell, line) in [('a', 1), ('b', 1), ('c', 1), ('b', 2), ('a', 2)] {
        history.record(cell, line);
    }
    assert_eq!(history.forget(&'b'), 2);
    assert!(!history.contains_cell(&'b'));
    assert_eq!(snapshot(&history), vec![('a', 1), ('c', 1), ('a', 2)]);
    assert_eq!(history.current(), Some(&Entry::new('a', 2)));
}

#[test]
fn forget_current_cell_moves_to_nearest_older_survivor() {
    let mut history = History::new();
    history.record('A', 1);
    history.record('B', 1);
    history.record('A', 2);
    history.forget(&'A');
    assert_eq!(snapshot(&history), vec![('B', 1)]);
    assert_eq!(history.cursor(), Some(0));
    assert_eq!(history.current(), Some(&Entry::new('B', 1)));
}

#[test]
fn forget_skips_consecutive_entries_of_the_cell() {
    let mut history = History::new();
    for (cell, line) in [('x', 1), ('y', 1), ('z', 1), ('y', 2), ('y', 3), ('z', 2)] {
        history.record(cell, line);
    }
    history.go_back();
    assert_eq!(history.current(), Some(&Entry::new('y', 3)));
    history.forget(&'y');
    assert_eq!(snapshot(&history), vec![('x', 1), ('z', 1), ('z', 2)]);
    assert_eq!(history.current(), Some(&Entry::new('z', 1)));
    assert_eq!(history.cursor(), Some(1));
}

#[test]
fn recording_after_forget_continues_from_anchor() {
    let mut history = History::new();
    for (cell, line) in [('a', 1), ('b', 1), ('c', 1), ('b', 2)] {
        history.record(cell, line);
    }
    history.go_back();
    history.go_back();
    history.forget(&'b');
    assert_eq!(history.current(), Some(&Entry::new('a', 1)));
    history.record('d', 1);
    assert_eq!(snapshot(&history), vec![('a', 1), ('d', 1)]);
}
