use core::fmt;

use libc::itimerspec;

use super::TimeSpec;

/// A timer configuration: re-arming interval and next expiration
///
/// A zero `initial` disarms the timer, whatever the `interval` says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    /// Interval for periodic re-arming
    pub interval: TimeSpec,
    /// Next (or only) expiration
    pub initial: TimeSpec,
}

impl TimerSpec {
    /// A spec that never fires
    pub const fn disarmed() -> Self {
        Self {
            interval: TimeSpec::Zero,
            initial: TimeSpec::Zero,
        }
    }

    /// Fire once, after `delay`
    pub const fn one_shot(delay: TimeSpec) -> Self {
        Self {
            interval: TimeSpec::Zero,
            initial: delay,
        }
    }

    /// Fire every `period`, starting one period from now
    pub const fn periodic(period: TimeSpec) -> Self {
        Self {
            interval: period,
            initial: period,
        }
    }

    /// Fire every `period`, with a custom first expiration
    ///
    /// Note: a zero `first` disarms the timer even when `period` is
    /// non-zero; callers meaning "start now" should pass the period.
    pub const fn periodic_with_start(period: TimeSpec, first: TimeSpec) -> Self {
        Self {
            interval: period,
            initial: first,
        }
    }

    /// Will this timer fire if submitted?
    pub const fn armed(&self) -> bool {
        !self.initial.is_zero()
    }

    /// Time until the next expiration, for kernel-read specs
    pub const fn next_expiration(&self) -> TimeSpec {
        self.initial
    }

    pub(crate) fn to_raw(self) -> itimerspec {
        itimerspec {
            it_interval: self.interval.to_raw(),
            it_value: self.initial.to_raw(),
        }
    }

    pub(crate) fn from_raw(raw: itimerspec) -> Self {
        Self {
            interval: TimeSpec::from_raw(raw.it_interval),
            initial: TimeSpec::from_raw(raw.it_value),
        }
    }
}

impl From<TimeSpec> for TimerSpec {
    /// A bare time value arms a one-shot timer
    fn from(delay: TimeSpec) -> Self {
        Self::one_shot(delay)
    }
}

impl From<core::time::Duration> for TimerSpec {
    fn from(delay: core::time::Duration) -> Self {
        Self::one_shot(delay.into())
    }
}

impl fmt::Display for TimerSpec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "next={}s interval={}s",
            self.initial.as_secs_f64(),
            self.interval.as_secs_f64()
        )
    }
}
