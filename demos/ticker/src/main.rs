//! Small demonstration of the timer handle: a periodic tick, an inspect
//! mid-period, then a one-shot.

use std::time::{Duration, Instant};

use libtimerfd::{ClockId, Error, TimeSpec, TimerFd, TimerFlags};
use log::info;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let timer = TimerFd::create(ClockId::Monotonic, TimerFlags::CLOEXEC)?;

    let period = TimeSpec::from_secs_f64(0.5);
    timer.set_periodic(period, false)?;
    info!("ticking every {:.2}s", period.as_secs_f64());

    for _ in 0..5 {
        let start = Instant::now();
        let expirations = timer.wait()?;
        info!(
            "woke up after {:.2}s ({} expiration(s))",
            start.elapsed().as_secs_f64(),
            expirations
        );
    }

    std::thread::sleep(Duration::from_millis(300));
    info!("next event: {}", timer.current()?);

    timer.set_one_shot(TimeSpec::from_millis(100), false)?;
    timer.wait()?;
    info!("one-shot fired");

    Ok(())
}
