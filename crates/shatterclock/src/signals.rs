//! Interrupt handling.
//!
//! SIGINT and SIGTERM are delivered to a dedicated thread, which restores
//! the terminal and exits the process with a success status. The render
//! loop shares no state with it.

use std::io;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

#[cfg(unix)]
use crate::terminal;

/// Listens for interrupts until dropped.
#[cfg(unix)]
#[derive(Debug)]
pub struct InterruptHandler {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl InterruptHandler {
    /// Register for SIGINT and SIGTERM and start the listener thread.
    pub fn install() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::Builder::new()
            .name("interrupt".into())
            .spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    tracing::warn!(signal, "interrupted, restoring terminal");
                    terminal::restore();
                    std::process::exit(0);
                }
            })?;
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for InterruptHandler {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// No signal support on this platform; the cursor guard still restores the
/// terminal on normal exit and on panic.
#[cfg(not(unix))]
#[derive(Debug)]
pub struct InterruptHandler;

#[cfg(not(unix))]
impl InterruptHandler {
    pub fn install() -> io::Result<Self> {
        Ok(Self)
    }
}
