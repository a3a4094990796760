use core::fmt;

use libc::c_int;

/// Half of a timer spec, used to report which nanosecond field overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecField {
    Interval,
    Initial,
}

impl fmt::Display for SpecField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecField::Interval => write!(formatter, "interval"),
            SpecField::Initial => write!(formatter, "initial expiration"),
        }
    }
}

/// Kernel timer operation, used to qualify the errno mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    SetTime,
    GetTime,
    Read,
    Close,
}

/// List of errors surfaced by the kernel timer facility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Clock is not one of the supported clocks
    InvalidClock,
    /// Flags are malformed, or the descriptor is not a timer
    InvalidArgument,
    /// A nanosecond component of a submitted spec exceeds 999,999,999
    NanosOutOfRange(SpecField),
    /// Per-process descriptor limit reached
    ProcessFdLimit,
    /// System-wide descriptor limit reached
    SystemFdLimit,
    /// Could not mount the internal anonymous inode device
    MountFailure,
    /// Insufficient kernel memory
    OutOfMemory,
    /// Descriptor refers to a closed or non-existent resource
    InvalidHandle,
    /// Internal marshalling fault. Always a bug, never a user error
    FaultyPointer,
    /// The consuming read found no expirations on a non-blocking descriptor
    WouldBlock,
    /// A blocking operation was interrupted by a signal
    Interrupted,
    /// Any code not covered above, kept verbatim for diagnostics
    Unexpected(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidClock => {
                write!(formatter, "clock is not one of the supported clocks")
            }
            Error::InvalidArgument => {
                write!(formatter, "invalid flags or not a timer descriptor")
            }
            Error::NanosOutOfRange(field) => {
                write!(formatter, "nanoseconds in {field} exceed 999,999,999")
            }
            Error::ProcessFdLimit => {
                write!(formatter, "per-process descriptor limit reached")
            }
            Error::SystemFdLimit => {
                write!(formatter, "system-wide descriptor limit reached")
            }
            Error::MountFailure => {
                write!(formatter, "could not mount internal anonymous inode device")
            }
            Error::OutOfMemory => {
                write!(formatter, "insufficient kernel memory")
            }
            Error::InvalidHandle => {
                write!(formatter, "descriptor is closed or not valid")
            }
            Error::FaultyPointer => {
                write!(formatter, "spec does not point to valid memory (internal bug)")
            }
            Error::WouldBlock => {
                write!(formatter, "no expirations pending")
            }
            Error::Interrupted => {
                write!(formatter, "interrupted by signal")
            }
            Error::Unexpected(code) => {
                write!(formatter, "unexpected errno {code}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Map a raw errno from a timer operation to a structured error
///
/// Codes outside the documented set are preserved in `Unexpected`.
pub fn map_errno(op: Operation, errno: c_int) -> Error {
    match errno {
        libc::EINVAL => Error::InvalidArgument,
        libc::EBADF => Error::InvalidHandle,
        libc::EFAULT => Error::FaultyPointer,
        libc::EMFILE => Error::ProcessFdLimit,
        libc::ENFILE => Error::SystemFdLimit,
        libc::ENODEV => Error::MountFailure,
        libc::ENOMEM => Error::OutOfMemory,
        libc::EAGAIN if op == Operation::Read => Error::WouldBlock,
        libc::EINTR if matches!(op, Operation::Read | Operation::Close) => Error::Interrupted,
        other => Error::Unexpected(other),
    }
}

/// Map a set-time failure, naming the overflowing nanosecond field
///
/// The kernel reports an out-of-range `tv_nsec` as a bare EINVAL; the
/// submitted spec disambiguates it from malformed flags.
pub fn settime_error(errno: c_int, spec: &libc::itimerspec) -> Error {
    if errno == libc::EINVAL {
        if !nanos_in_range(spec.it_interval.tv_nsec) {
            return Error::NanosOutOfRange(SpecField::Interval);
        }
        if !nanos_in_range(spec.it_value.tv_nsec) {
            return Error::NanosOutOfRange(SpecField::Initial);
        }
    }

    map_errno(Operation::SetTime, errno)
}

const fn nanos_in_range(nanos: libc::c_long) -> bool {
    nanos >= 0 && nanos < 1_000_000_000
}
