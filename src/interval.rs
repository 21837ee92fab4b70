use nix::libc::{c_long, time_t, timespec};
use nix::sys::time::TimeSpec;
use std::time::Duration;

pub const MILLIS_PER_SEC: u64 = 1_000;
pub const NANOS_PER_MILLI: u32 = 1_000_000;
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// A time interval split into whole seconds and the sub-second remainder,
/// the shape `nanosleep` wants its request in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    secs: u64,
    nanos: u32,
}

impl Interval {
    /// Builds an interval from raw parts. Nanoseconds past one second are
    /// carried into the seconds field so that `nanos` stays below 10^9.
    pub fn new(secs: u64, nanos: u32) -> Self {
        let carry = u64::from(nanos / NANOS_PER_SEC);
        Interval {
            secs: secs.saturating_add(carry),
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Interval {
            secs: millis / MILLIS_PER_SEC,
            nanos: (millis % MILLIS_PER_SEC) as u32 * NANOS_PER_MILLI,
        }
    }

    pub fn secs(&self) -> u64 {
        self.secs
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Converts to the platform representation. Returns `None` when the
    /// seconds do not fit in `time_t`.
    pub fn to_timespec(&self) -> Option<TimeSpec> {
        let secs = time_t::try_from(self.secs).ok()?;
        Some(TimeSpec::new(secs, self.nanos as c_long))
    }

    /// Reads back the remainder the kernel wrote after an interrupted wait.
    /// Negative fields never come out of `nanosleep`; clamp them anyway.
    pub fn from_timespec(ts: &timespec) -> Self {
        let secs = u64::try_from(ts.tv_sec).unwrap_or(0);
        let nanos = u32::try_from(ts.tv_nsec).unwrap_or(0);
        Interval::new(secs, nanos)
    }
}

impl From<Interval> for Duration {
    fn from(interval: Interval) -> Self {
        Duration::new(interval.secs, interval.nanos)
    }
}
