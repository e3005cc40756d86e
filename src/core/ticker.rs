//! Cancellable repeating timer driving the live elapsed-time display.
//!
//! A `Ticker` owns one background thread that calls `on_tick` once per period
//! until the ticker is disarmed or dropped. The thread waits on a channel with
//! a timeout, so disarming wakes it immediately instead of after the period.

use super::tracker::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn arm<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                match rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => on_tick(),
                    // explicit stop or sender dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        Self {
            stop: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the ticking thread and wait for it. Idempotent.
    pub fn disarm(&mut self) {
        if let Some(tx) = self.stop.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// One-second ticker rendering `now - started_at` on every tick.
pub fn elapsed_display<C, F>(clock: C, started_at: DateTime<Utc>, mut render: F) -> Ticker
where
    C: Clock + Send + 'static,
    F: FnMut(TimeDelta) + Send + 'static,
{
    Ticker::arm(Duration::from_secs(1), move || {
        render(clock.now() - started_at)
    })
}
