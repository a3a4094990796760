use libc::c_int;

use super::Error;

/// Clock backing a timer descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockId {
    /// Wall-clock time. Affected by system time changes
    Realtime,
    /// Monotonically increasing time source
    Monotonic,
}

impl ClockId {
    /// Get the raw kernel clock id
    pub const fn as_raw(self) -> c_int {
        match self {
            ClockId::Realtime => libc::CLOCK_REALTIME,
            ClockId::Monotonic => libc::CLOCK_MONOTONIC,
        }
    }

    /// Build a clock id from its raw kernel value
    ///
    /// Only the two clocks supported for timer descriptors are accepted.
    pub fn from_raw(raw: c_int) -> Result<Self, Error> {
        match raw {
            libc::CLOCK_REALTIME => Ok(ClockId::Realtime),
            libc::CLOCK_MONOTONIC => Ok(ClockId::Monotonic),
            _ => Err(Error::InvalidClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip() {
        for clock in [ClockId::Realtime, ClockId::Monotonic] {
            assert_eq!(ClockId::from_raw(clock.as_raw()), Ok(clock));
        }
    }

    #[test]
    fn unsupported_clocks_are_rejected() {
        assert_eq!(ClockId::from_raw(libc::CLOCK_BOOTTIME), Err(Error::InvalidClock));
        assert_eq!(ClockId::from_raw(-1), Err(Error::InvalidClock));
    }
}
