use std::os::fd::{AsRawFd, RawFd};

use log::debug;
use timersys::{timer, ClockId, Error, Fd, SetTimeFlags, TimerFlags};

use super::{Result, TimeSpec, TimerSpec};

/// Timer descriptor object
///
/// Owns the kernel timer exclusively: nothing else may close or
/// reconfigure it. The handle is not internally synchronized, so it must
/// be driven by a single logical owner; the raw descriptor may be shared
/// read-only for readiness polling (see [`AsRawFd`]).
#[derive(Debug)]
pub struct TimerFd {
    fd: Fd,
    clock: ClockId,
    flags: TimerFlags,
}

impl TimerFd {
    /// Create a new timer backed by the given clock
    pub fn create(clock: ClockId, flags: TimerFlags) -> Result<Self> {
        let fd = timer::create(clock, flags)?;
        debug!("created timer descriptor {} on {:?}", fd.as_raw(), clock);

        Ok(Self { fd, clock, flags })
    }

    /// Arm the timer with the given spec
    ///
    /// Returns the spec that was previously in effect, so a caller can
    /// restore it later. When `absolute` is set, the initial expiration
    /// is a point in clock time rather than a delay from now.
    pub fn arm(&self, spec: impl Into<TimerSpec>, absolute: bool) -> Result<TimerSpec> {
        let fd = self.open_fd()?;
        let flags = if absolute {
            SetTimeFlags::ABSTIME
        } else {
            SetTimeFlags::empty()
        };

        let old = timer::set_time(fd, flags, &spec.into().to_raw())?;

        Ok(TimerSpec::from_raw(old))
    }

    /// Arm a single expiration after (or at) `delay`
    pub fn set_one_shot(&self, delay: TimeSpec, absolute: bool) -> Result<TimerSpec> {
        self.arm(TimerSpec::one_shot(delay), absolute)
    }

    /// Arm a periodic expiration every `period`, first firing one period
    /// from now
    pub fn set_periodic(&self, period: TimeSpec, absolute: bool) -> Result<TimerSpec> {
        self.arm(TimerSpec::periodic(period), absolute)
    }

    /// Arm a periodic expiration with a custom first expiration
    pub fn set_periodic_with_start(
        &self,
        period: TimeSpec,
        first: TimeSpec,
        absolute: bool,
    ) -> Result<TimerSpec> {
        self.arm(TimerSpec::periodic_with_start(period, first), absolute)
    }

    /// Read the current spec without consuming pending expirations
    pub fn current(&self) -> Result<TimerSpec> {
        let curr = timer::get_time(self.open_fd()?)?;

        Ok(TimerSpec::from_raw(curr))
    }

    /// Block until the timer expires, then return the number of
    /// expirations since the last read
    ///
    /// A periodic timer that expired several times while the caller was
    /// not scheduled reports the accumulated count; a successful wait
    /// never returns zero. A signal arriving during the wait surfaces as
    /// [`Error::Interrupted`] rather than being retried, so the caller's
    /// own interruption mechanism stays effective.
    pub fn wait(&self) -> Result<u64> {
        loop {
            let fd = self.open_fd()?;
            timer::wait_readable(fd)?;

            match timer::read_count(fd) {
                // lost the race for the counter, wait again
                Err(Error::WouldBlock) => continue,
                res => return res,
            }
        }
    }

    /// Will the timer fire if left as configured?
    pub fn is_armed(&self) -> Result<bool> {
        Ok(self.current()?.armed())
    }

    /// Stop the timer from firing, keeping the descriptor open
    ///
    /// Only the next expiration is zeroed; once it is zero the interval
    /// is ignored by the kernel anyway.
    pub fn disarm(&self) -> Result<()> {
        let mut spec = self.current()?;
        spec.initial = TimeSpec::Zero;
        self.arm(spec, false)?;

        Ok(())
    }

    /// Close the timer descriptor
    ///
    /// Any further operation on the handle, including a second close,
    /// fails with [`Error::InvalidHandle`] without reaching the kernel.
    pub fn close(&mut self) -> Result<()> {
        if !self.fd.valid() {
            return Err(Error::InvalidHandle);
        }

        let fd = core::mem::replace(&mut self.fd, Fd::invalid());
        debug!("closing timer descriptor {}", fd.as_raw());

        fd.close()
    }

    /// Clock backing this timer
    pub const fn clock(&self) -> ClockId {
        self.clock
    }

    /// Flags the descriptor was opened with
    pub const fn flags(&self) -> TimerFlags {
        self.flags
    }

    fn open_fd(&self) -> Result<&Fd> {
        if self.fd.valid() {
            Ok(&self.fd)
        } else {
            Err(Error::InvalidHandle)
        }
    }
}

impl AsRawFd for TimerFd {
    /// Raw descriptor for readiness polling by an external event loop
    ///
    /// State-changing operations must stay with the owning handle.
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw()
    }
}
