//! Countdown task.
//!
//! At most one ticking task exists at a time. [`Countdown::sync`] is called
//! after every event with the quiz's guard; it spawns the task when the guard
//! turns true and aborts it as soon as the guard turns false. Each task gets
//! a fresh generation number and a fresh interval whose first tick fires one
//! full period after starting, so pausing never carries over a partial
//! second. Ticks already queued by an aborted task are recognised as stale
//! through [`Countdown::is_current`].

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub type Generation = u64;

struct Running {
    generation: Generation,
    handle: JoinHandle<()>,
}

pub struct Countdown {
    period: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    running: Option<Running>,
    next_generation: Generation,
}

impl Countdown {
    pub fn new(period: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            period,
            event_tx,
            running: None,
            next_generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// True if `generation` belongs to the task that is currently ticking.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.running
            .as_ref()
            .is_some_and(|r| r.generation == generation)
    }

    pub fn sync(&mut self, should_run: bool) {
        match (should_run, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    fn start(&mut self) {
        let generation = self.next_generation;
        self.next_generation += 1;

        let tx = self.event_tx.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Countdown { generation }).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(generation, "countdown started");
        self.running = Some(Running { generation, handle });
    }

    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.handle.abort();
            tracing::debug!(generation = running.generation, "countdown stopped");
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(10);

    async fn next_generation(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Generation {
        match time::timeout(Duration::from_secs(2), rx.recv()).await {
            Ok(Some(AppEvent::Countdown { generation })) => generation,
            other => panic!("expected countdown tick, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_ticks_while_running() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut countdown = Countdown::new(PERIOD, tx);
        countdown.sync(true);
        assert!(countdown.is_running());

        for _ in 0..3 {
            let generation = next_generation(&mut rx).await;
            assert!(countdown.is_current(generation));
        }
    }

    #[tokio::test]
    async fn test_stop_is_immediate_and_restart_is_fresh() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut countdown = Countdown::new(PERIOD, tx);
        countdown.sync(true);
        let first = next_generation(&mut rx).await;

        countdown.sync(false);
        assert!(!countdown.is_running());
        assert!(!countdown.is_current(first));

        time::sleep(PERIOD * 5).await;
        while let Ok(event) = rx.try_recv() {
            // anything queued before the abort carries the old generation
            if let AppEvent::Countdown { generation } = event {
                assert_eq!(generation, first);
            }
        }

        countdown.sync(true);
        let second = next_generation(&mut rx).await;
        assert_ne!(first, second);
        assert!(countdown.is_current(second));
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut countdown = Countdown::new(PERIOD, tx);
        countdown.sync(true);
        countdown.sync(true);
        let generation = next_generation(&mut rx).await;
        assert_eq!(generation, 0);
        countdown.sync(false);
        countdown.sync(false);
        assert!(!countdown.is_running());
    }

    #[tokio::test]
    async fn test_drop_aborts_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut countdown = Countdown::new(PERIOD, tx);
        countdown.sync(true);
        let _ = next_generation(&mut rx).await;
        drop(countdown);
        time::sleep(PERIOD * 5).await;
        while rx.try_recv().is_ok() {}
        // every sender is gone once the aborted task has been dropped
        assert!(time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap().is_none());
    }
}
