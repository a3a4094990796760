//! Typed, safe handle over kernel timer descriptors.
//!
//! A [`TimerFd`] owns one kernel timer and delivers expirations through a
//! pollable descriptor instead of signals. Configurations are modeled by
//! [`TimerSpec`] (one-shot or periodic, relative or absolute) built from
//! [`TimeSpec`] values.

mod spec;
mod time;
mod timer;

pub use spec::TimerSpec;
pub use time::TimeSpec;
pub use timer::TimerFd;

pub use timersys::{ClockId, Error, SetTimeFlags, SpecField, TimerFlags};

/// Result of timer operations
pub type Result<T> = core::result::Result<T, Error>;
