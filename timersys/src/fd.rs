use std::os::fd::RawFd;

use log::warn;

use super::{Operation, SysResult, last_errno, map_errno};

/// Owned timer descriptor
///
/// The kernel resource is released exactly once, either through the
/// consuming [`close`](Fd::close) or on drop.
#[derive(Debug)]
pub struct Fd(RawFd);

impl Fd {
    /// Construct a new invalid descriptor
    pub const fn invalid() -> Self {
        Fd(-1)
    }

    /// Indicate if the descriptor is valid
    pub const fn valid(&self) -> bool {
        self.0 >= 0
    }

    /// Get the raw descriptor value
    pub const fn as_raw(&self) -> RawFd {
        self.0
    }

    /// Build a descriptor from a raw value. Reserved for the create wrapper
    ///
    /// # Safety
    ///
    /// The caller must own `raw` and hand its closing over to this value.
    pub const unsafe fn from_raw(raw: RawFd) -> Self {
        Fd(raw)
    }

    /// Close the descriptor, surfacing the kernel error
    pub fn close(mut self) -> SysResult<()> {
        let raw = self.0;
        // invalidate first so drop never closes twice
        self.0 = -1;

        let ret = unsafe { libc::close(raw) };
        if ret < 0 {
            return Err(map_errno(Operation::Close, last_errno()));
        }

        Ok(())
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        if self.valid() {
            let ret = unsafe { libc::close(self.0) };
            if ret < 0 {
                warn!(
                    "could not close timer descriptor {}: {}",
                    self.0,
                    map_errno(Operation::Close, last_errno())
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn invalid_descriptor_is_not_valid() {
        let fd = Fd::invalid();
        assert!(!fd.valid());
        assert_eq!(fd.as_raw(), -1);
    }

    #[test]
    fn closing_an_invalid_descriptor_reports_it() {
        assert_eq!(Fd::invalid().close(), Err(Error::InvalidHandle));
    }
}
