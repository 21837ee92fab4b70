//! Millisecond sleeps on top of `nanosleep(2)` that survive signal
//! interruptions by waiting out whatever time the kernel reports as left.

pub mod error;
pub mod interval;
pub mod signals;
pub mod sleeper;
pub mod utils;

pub use error::{Result, SleepError};
pub use interval::Interval;
pub use sleeper::{parse_millis, wait, wait_with, Nanosleep, TimedWait, WaitOutcome};
