//! Build errors for the scheduler builder.

use thiserror::Error;

/// Errors that can occur when building a scheduler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Tick source not specified. Call .clock(source) before .build()")]
    MissingClock,

    #[error("Initial delay of {delay} ms exceeds the tick counter range (max: {max})")]
    InitialDelayOutOfRange { delay: u64, max: u64 },
}
