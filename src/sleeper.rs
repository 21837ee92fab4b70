use crate::error::{Result, SleepError};
use crate::interval::Interval;
use nix::errno::Errno;
use nix::libc;
use nix::sys::time::TimeSpec;

/// What a single timed wait came back with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Completed,
    /// A signal cut the wait short; this much of it was left.
    Interrupted(Interval),
}

/// One call of a blocking timed-wait primitive.
pub trait TimedWait {
    fn wait_once(&mut self, request: Interval) -> Result<WaitOutcome>;
}

/// `nanosleep(2)` on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nanosleep;

impl TimedWait for Nanosleep {
    fn wait_once(&mut self, request: Interval) -> Result<WaitOutcome> {
        let req = request
            .to_timespec()
            .ok_or(SleepError::TooLong(request.secs()))?;
        let mut rem = *TimeSpec::new(0, 0).as_ref();

        // SAFETY: both pointers refer to live, properly initialised timespecs.
        let res = unsafe { libc::nanosleep(req.as_ref(), &mut rem) };
        match Errno::result(res) {
            Ok(_) => Ok(WaitOutcome::Completed),
            Err(Errno::EINTR) => Ok(WaitOutcome::Interrupted(Interval::from_timespec(&rem))),
            Err(errno) => Err(SleepError::Wait(errno)),
        }
    }
}

/// Waits out `interval` on `timer`, re-issuing the wait with whatever time
/// is left each time it gets interrupted.
///
/// Returns the number of interruptions absorbed along the way.
pub fn wait_with<T: TimedWait>(timer: &mut T, interval: Interval) -> Result<usize> {
    let mut remaining = interval;
    let mut interruptions = 0;
    loop {
        match timer.wait_once(remaining)? {
            WaitOutcome::Completed => return Ok(interruptions),
            WaitOutcome::Interrupted(left) => {
                interruptions += 1;
                remaining = left;
            }
        }
    }
}

/// Blocks the calling thread for at least `millis` milliseconds.
pub fn wait(millis: u64) -> Result<()> {
    wait_with(&mut Nanosleep, Interval::from_millis(millis)).map(|_| ())
}

/// Parses the sleep time argument as a plain non-negative number of
/// milliseconds.
pub fn parse_millis(arg: &str) -> Result<u64> {
    arg.parse::<u64>()
        .map_err(|source| SleepError::InvalidArgument {
            arg: arg.to_string(),
            source,
        })
}
