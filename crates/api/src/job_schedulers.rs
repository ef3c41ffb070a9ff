use crate::{
    reminder::{
        CleanupNotifiedRemindersUseCase, HandleInboundCommandsUseCase, SendDueRemindersUseCase,
    },
    shared::usecase::{execute, UseCase},
};
use futures::FutureExt;
use lab_reminders_infra::LabContext;
use std::fmt::Debug;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{error, info};

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Seconds from `now_ts` (millis) until the next `hour_of_day`:00:00 UTC.
/// Being exactly on the hour means waiting a full day.
pub fn get_start_delay(now_ts: i64, hour_of_day: u32) -> u64 {
    let secs_into_day = (now_ts / 1000).rem_euclid(SECS_PER_DAY);
    let target = i64::from(hour_of_day % 24) * 60 * 60;
    let delay = if target > secs_into_day {
        target - secs_into_day
    } else {
        SECS_PER_DAY - secs_into_day + target
    };
    delay as u64
}

/// Owns the background tasks of the reminder engine: inbound command
/// polling, the due sweep and the daily cleanup of notified reminders.
///
/// The tasks stop before their next tick once `stop` is called or the
/// scheduler is dropped. A tick in progress always runs to completion.
pub struct ReminderScheduler {
    shutdown: watch::Sender<bool>,
}

impl ReminderScheduler {
    pub fn start(ctx: LabContext) -> Self {
        let (shutdown, signal) = watch::channel(false);
        let config = &ctx.config;

        let poll_period = Duration::from_secs(config.poll_interval_secs);
        let sweep_period = Duration::from_secs(config.sweep_interval_secs);
        let cleanup_delay = Duration::from_secs(get_start_delay(
            ctx.sys.get_timestamp_millis(),
            config.cleanup_hour_utc,
        ));
        info!(
            "Starting reminder jobs: polling every {:?}, sweeping every {:?}, first cleanup in {:?}",
            poll_period, sweep_period, cleanup_delay
        );

        start_job(ctx.clone(), Duration::ZERO, poll_period, signal.clone(), || {
            HandleInboundCommandsUseCase
        });
        start_job(ctx.clone(), Duration::ZERO, sweep_period, signal.clone(), || {
            SendDueRemindersUseCase
        });
        start_job(
            ctx,
            cleanup_delay,
            Duration::from_secs(SECS_PER_DAY as u64),
            signal,
            || CleanupNotifiedRemindersUseCase,
        );

        Self { shutdown }
    }

    pub fn stop(&self) {
        info!("Stopping reminder jobs");
        let _ = self.shutdown.send(true);
    }
}

/// Waits for the next tick. Returns false once the scheduler is stopped.
async fn next_tick(interval: &mut Interval, shutdown: &mut watch::Receiver<bool>) -> bool {
    if *shutdown.borrow() {
        return false;
    }
    tokio::select! {
        _ = interval.tick() => !*shutdown.borrow(),
        res = shutdown.changed() => res.is_ok() && !*shutdown.borrow(),
    }
}

fn start_job<U, F>(
    ctx: LabContext,
    start_delay: Duration,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
    usecase: F,
) where
    U: UseCase + 'static,
    U::Error: Debug,
    F: Fn() -> U + 'static,
{
    actix_web::rt::spawn(async move {
        let mut interval = interval_at(Instant::now() + start_delay, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while next_tick(&mut interval, &mut shutdown).await {
            // Errors are logged by `execute`, the next tick proceeds regardless
            let tick = AssertUnwindSafe(execute(usecase(), &ctx)).catch_unwind();
            if tick.await.is_err() {
                error!("Job {} panicked, skipping this tick", U::NAME);
            }
        }
        info!("Job {} stopped", U::NAME);
    });
}
