//! Kernel-backed timer tests. These drive real timer descriptors, so they
//! only run on Linux; timing assertions are tolerance-based.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use libtimerfd::{ClockId, Error, TimeSpec, TimerFd, TimerFlags, TimerSpec};

fn monotonic() -> TimerFd {
    TimerFd::create(ClockId::Monotonic, TimerFlags::CLOEXEC).expect("could not create timer")
}

#[test]
fn one_shot_fires_once() {
    let timer = monotonic();
    timer.set_one_shot(TimeSpec::from_millis(50), false).unwrap();

    let start = Instant::now();
    assert_eq!(timer.wait().unwrap(), 1);
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[test]
fn periodic_accounting_over_half_a_second() {
    let timer = monotonic();
    timer.set_periodic(TimeSpec::from_millis(100), false).unwrap();

    let start = Instant::now();
    let mut total = 0;
    while total < 5 {
        total += timer.wait().unwrap();
    }

    // five periods of 100ms, however the expirations were batched
    assert!(total >= 5);
    assert!(start.elapsed() >= Duration::from_millis(450));
}

#[test]
fn stalled_reader_accumulates_expirations() {
    let timer = monotonic();
    timer.set_periodic(TimeSpec::from_millis(50), false).unwrap();

    std::thread::sleep(Duration::from_millis(180));
    assert!(timer.wait().unwrap() >= 2);
}

#[test]
fn wait_works_on_nonblocking_descriptors() {
    let timer = TimerFd::create(
        ClockId::Monotonic,
        TimerFlags::CLOEXEC | TimerFlags::NONBLOCK,
    )
    .unwrap();

    timer.set_one_shot(TimeSpec::from_millis(20), false).unwrap();
    assert_eq!(timer.wait().unwrap(), 1);
}

#[test]
fn arm_returns_the_previous_spec() {
    let timer = monotonic();

    let first = TimerSpec::periodic_with_start(TimeSpec::from_secs(3), TimeSpec::from_secs(60));
    timer.arm(first, false).unwrap();

    let previous = timer
        .arm(TimerSpec::one_shot(TimeSpec::from_secs(5)), false)
        .unwrap();

    // the interval comes back verbatim; the initial field has been
    // counting down since the first arm
    assert_eq!(previous.interval, TimeSpec::from_secs(3));
    assert!(previous.armed());
    assert!(previous.next_expiration().as_secs_f64() <= 60.0);
}

#[test]
fn absolute_one_shot_on_the_realtime_clock() {
    let timer = TimerFd::create(ClockId::Realtime, TimerFlags::CLOEXEC).unwrap();

    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
    let deadline = TimeSpec::from_secs_f64(now.as_secs_f64() + 0.05);
    timer.set_one_shot(deadline, true).unwrap();

    assert_eq!(timer.wait().unwrap(), 1);
}

#[test]
fn inspect_does_not_consume_expirations() {
    let timer = monotonic();
    timer.set_one_shot(TimeSpec::from_millis(20), false).unwrap();

    std::thread::sleep(Duration::from_millis(60));
    let spec = timer.current().unwrap();
    assert!(!spec.armed());

    // the pending expiration must still be readable
    assert_eq!(timer.wait().unwrap(), 1);
}

#[test]
fn disarm_zeroes_the_next_expiration() {
    let timer = monotonic();
    timer.set_periodic(TimeSpec::from_secs(2), false).unwrap();
    assert!(timer.is_armed().unwrap());

    timer.disarm().unwrap();
    assert!(!timer.is_armed().unwrap());
    assert!(timer.current().unwrap().initial.is_zero());
}

#[test]
fn operations_after_close_fail_cleanly() {
    let mut timer = monotonic();
    timer.close().unwrap();

    assert_eq!(timer.close(), Err(Error::InvalidHandle));
    assert_eq!(timer.current(), Err(Error::InvalidHandle));
    assert_eq!(timer.wait(), Err(Error::InvalidHandle));
    assert_eq!(
        timer.set_one_shot(TimeSpec::from_secs(1), false),
        Err(Error::InvalidHandle)
    );
    assert_eq!(timer.disarm(), Err(Error::InvalidHandle));
}

#[test]
fn handle_metadata_is_kept() {
    let timer = TimerFd::create(ClockId::Realtime, TimerFlags::CLOEXEC).unwrap();
    assert_eq!(timer.clock(), ClockId::Realtime);
    assert_eq!(timer.flags(), TimerFlags::CLOEXEC);
}
