use libc::timespec;

pub(crate) const NANOS_PER_SEC: u32 = 1_000_000_000;

/// An immutable seconds + nanoseconds time value
///
/// The nanoseconds part never exceeds 999,999,999; every constructor
/// carries any excess into whole seconds, so an out-of-range value is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpec {
    secs: u64,
    nanos: u32,
}

#[allow(non_upper_case_globals)]
impl TimeSpec {
    /// Zero time value
    pub const Zero: Self = Self { secs: 0, nanos: 0 };
}

impl TimeSpec {
    /// Create a new time value from whole seconds and nanoseconds
    pub const fn new(secs: u64, nanos: u32) -> Self {
        Self {
            secs: secs + (nanos / NANOS_PER_SEC) as u64,
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    /// Create a new time value from whole seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self { secs, nanos: 0 }
    }

    /// Create a new time value from milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            secs: millis / 1_000,
            nanos: (millis % 1_000) as u32 * 1_000_000,
        }
    }

    /// Create a time value from a float number of seconds
    ///
    /// The fractional part is rounded to the nearest nanosecond; a
    /// fraction that rounds up to a full second carries into the seconds
    /// part. Negative or non-finite input saturates to zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::Zero;
        }

        let whole = secs.trunc() as u64;
        let nanos = (secs.fract() * NANOS_PER_SEC as f64).round() as u32;

        Self::new(whole, nanos)
    }

    /// Get the value as a float number of seconds
    pub fn as_secs_f64(&self) -> f64 {
        self.secs as f64 + self.nanos as f64 / NANOS_PER_SEC as f64
    }

    /// Whole seconds part
    pub const fn secs(&self) -> u64 {
        self.secs
    }

    /// Nanoseconds part, always within 0..=999,999,999
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    pub(crate) fn to_raw(self) -> timespec {
        timespec {
            tv_sec: self.secs as libc::time_t,
            tv_nsec: self.nanos as libc::c_long,
        }
    }

    pub(crate) fn from_raw(raw: timespec) -> Self {
        // kernel-read values already satisfy the invariant
        Self {
            secs: raw.tv_sec as u64,
            nanos: raw.tv_nsec as u32,
        }
    }
}

impl From<core::time::Duration> for TimeSpec {
    fn from(duration: core::time::Duration) -> Self {
        Self {
            secs: duration.as_secs(),
            nanos: duration.subsec_nanos(),
        }
    }
}
