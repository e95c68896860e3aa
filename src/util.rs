// util.rs

use std::io::{self, ErrorKind, Write};

/// Writes `s` and a newline, treating a closed reader as success so piping
/// console output into `head` does not abort the session.
pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Flushes `w`, treating a closed reader as success.
pub fn flush_ignore_broken_pipe<W: Write>(mut w: W) -> io::Result<()> {
    match w.flush() {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
