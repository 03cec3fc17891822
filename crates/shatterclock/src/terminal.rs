//! Terminal control: frame clearing and cursor visibility.

use std::fmt;
use std::io::{self, Write};

use crossterm::{Command, cursor, execute};

/// Move the cursor home, then erase the screen and its scrollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearFrame;

impl Command for ClearFrame {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H\x1b[2J\x1b[3J")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        use crossterm::terminal::{Clear, ClearType};

        cursor::MoveTo(0, 0).execute_winapi()?;
        Clear(ClearType::All).execute_winapi()?;
        Clear(ClearType::Purge).execute_winapi()
    }
}

/// Keeps the cursor hidden for as long as it is alive.
///
/// Writes pass through to the wrapped writer. Dropping the guard shows the
/// cursor again, which also happens while unwinding from a panic.
#[derive(Debug)]
pub struct CursorGuard<W: Write> {
    out: W,
}

impl<W: Write> CursorGuard<W> {
    /// Hide the cursor on `out`.
    pub fn new(mut out: W) -> io::Result<Self> {
        execute!(out, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl<W: Write> Write for CursorGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show);
    }
}

/// Show the cursor and clear the screen on `out`.
pub fn restore_to(out: &mut impl Write) -> io::Result<()> {
    execute!(out, cursor::Show, ClearFrame)
}

/// Show the cursor and clear the screen on stdout, ignoring errors.
///
/// Safe to call any number of times, from any thread.
pub fn restore() {
    let _ = restore_to(&mut io::stdout());
}

/// Restore the terminal before the panic report is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use crossterm::queue;

    use super::*;

    #[test]
    fn test_clear_frame_sequence() {
        let mut buf = Vec::new();
        queue!(buf, ClearFrame).unwrap();
        assert_eq!(buf, b"\x1b[H\x1b[2J\x1b[3J");
    }

    #[test]
    fn test_restore_sequence() {
        let mut buf = Vec::new();
        restore_to(&mut buf).unwrap();
        assert_eq!(buf, b"\x1b[?25h\x1b[H\x1b[2J\x1b[3J");

        restore_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 2 * b"\x1b[?25h\x1b[H\x1b[2J\x1b[3J".len());
    }

    #[test]
    fn test_guard_hides_then_shows() {
        let mut buf = Vec::new();
        {
            let mut guard = CursorGuard::new(&mut buf).unwrap();
            guard.write_all(b"frame").unwrap();
        }
        assert_eq!(buf, b"\x1b[?25lframe\x1b[?25h");
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let mut buf = Vec::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = CursorGuard::new(&mut buf).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(buf.ends_with(b"\x1b[?25h"));
    }
}
