use nix::sys::pthread::{pthread_kill, Pthread};
use nix::sys::signal::Signal;
use signal_hook::consts::signal::SIGUSR1;
use signal_hook::flag;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Signal used to knock a thread out of its wait.
pub const WAKEUP: Signal = Signal::SIGUSR1;

/// Installs a SIGUSR1 handler that does nothing beyond raising a private
/// flag. With the default disposition the signal would kill the process;
/// with this handler in place it just makes a pending `nanosleep` return
/// EINTR.
pub fn install_wakeup_handler() -> io::Result<()> {
    flag::register(SIGUSR1, Arc::new(AtomicBool::new(false)))?;
    Ok(())
}

/// Sends the wake-up signal to one particular thread.
pub fn poke(thread: Pthread) -> nix::Result<()> {
    pthread_kill(thread, WAKEUP)
}
