use bitflags::bitflags;
use libc::c_int;

bitflags! {
  /// Options for creating a timer descriptor
  #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
  pub struct TimerFlags: c_int {
      /// Close the descriptor when executing a new program
      const CLOEXEC = libc::TFD_CLOEXEC;

      /// Open the descriptor in non-blocking mode
      const NONBLOCK = libc::TFD_NONBLOCK;
  }
}

bitflags! {
  /// Options for arming a timer
  #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
  pub struct SetTimeFlags: c_int {
      /// Interpret the initial expiration as absolute clock time rather
      /// than a delay from now
      const ABSTIME = libc::TFD_TIMER_ABSTIME;
  }
}
