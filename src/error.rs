use nix::errno::Errno;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SleepError {
    #[error("invalid sleep time '{arg}': {source}")]
    InvalidArgument {
        arg: String,
        #[source]
        source: ParseIntError,
    },

    #[error("sleep of {0} seconds does not fit in time_t")]
    TooLong(u64),

    #[error("nanosleep failed: {0}")]
    Wait(#[from] Errno),
}

pub type Result<T> = std::result::Result<T, SleepError>;
