use core::mem;

use libc::itimerspec;

use super::{
    ClockId, Fd, Operation, SetTimeFlags, SysResult, TimerFlags, last_errno, map_errno,
    settime_error,
};

/// Create a new kernel timer backed by the given clock
pub fn create(clock: ClockId, flags: TimerFlags) -> SysResult<Fd> {
    let ret = unsafe { libc::timerfd_create(clock.as_raw(), flags.bits()) };
    if ret < 0 {
        return Err(map_errno(Operation::Create, last_errno()));
    }

    Ok(unsafe { Fd::from_raw(ret) })
}

/// Submit a new spec, returning the spec that was previously in effect
pub fn set_time(fd: &Fd, flags: SetTimeFlags, new: &itimerspec) -> SysResult<itimerspec> {
    let mut old: itimerspec = unsafe { mem::zeroed() };

    let ret = unsafe { libc::timerfd_settime(fd.as_raw(), flags.bits(), new, &mut old) };
    if ret < 0 {
        return Err(settime_error(last_errno(), new));
    }

    Ok(old)
}

/// Read the current spec without consuming pending expirations
pub fn get_time(fd: &Fd) -> SysResult<itimerspec> {
    let mut curr: itimerspec = unsafe { mem::zeroed() };

    let ret = unsafe { libc::timerfd_gettime(fd.as_raw(), &mut curr) };
    if ret < 0 {
        return Err(map_errno(Operation::GetTime, last_errno()));
    }

    Ok(curr)
}

/// Consume the expiration counter, resetting it to zero
///
/// The kernel delivers the count as an 8-byte little-endian value.
pub fn read_count(fd: &Fd) -> SysResult<u64> {
    let mut buf = [0u8; 8];

    let ret = unsafe { libc::read(fd.as_raw(), buf.as_mut_ptr().cast(), buf.len()) };
    if ret < 0 {
        return Err(map_errno(Operation::Read, last_errno()));
    }

    Ok(u64::from_le_bytes(buf))
}

/// Block until the descriptor becomes readable
///
/// Polling first keeps the consuming read from spinning on descriptors
/// opened with `NONBLOCK`.
pub fn wait_readable(fd: &Fd) -> SysResult<()> {
    let mut pollfd = libc::pollfd {
        fd: fd.as_raw(),
        events: libc::POLLIN,
        revents: 0,
    };

    let ret = unsafe { libc::poll(&mut pollfd, 1, -1) };
    if ret < 0 {
        return Err(map_errno(Operation::Read, last_errno()));
    }

    Ok(())
}
