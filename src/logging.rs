//! Browser Logging
//!
//! Routes `tracing` events (from the filter crate) to the browser console.

use std::io;

use tracing::Level;
use tracing_subscriber::fmt;

/// Buffers one formatted event and prints it to the console when dropped
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = console_line(&self.buf) {
            web_sys::console::log_1(&line.into());
        }
    }
}

/// Formatted event text without the trailing newline, if any
fn console_line(buf: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(buf);
    let line = line.trim_end();
    (!line.is_empty()).then(|| line.to_string())
}

/// Install the global subscriber. Call once, before mounting.
pub fn init(level: Level) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_writer(ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::log_1(&"[APP] tracing subscriber already installed".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line_trims_newline() {
        assert_eq!(console_line(b" WARN bucket=decade\n").as_deref(), Some(" WARN bucket=decade"));
        assert_eq!(console_line(b"\n"), None);
    }
}
