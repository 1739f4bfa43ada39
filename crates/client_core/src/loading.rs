//! Cosmetic loading indicator. Nothing here reflects real request progress.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval_at, Instant},
};

pub const PROGRESS_STEP: u8 = 2;
pub const PROGRESS_CAP: u8 = 95;
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(400);
pub const MESSAGE_INTERVAL: Duration = Duration::from_millis(2500);

pub const LOADING_MESSAGES: [&str; 6] = [
    "Igniting neural networks...",
    "Curating personalized content...",
    "Connecting concepts to your hobbies...",
    "Designing your learning phases...",
    "Finding the best real-world examples...",
    "Finalizing your unique pathway...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingProgress {
    percent: u8,
    message_index: usize,
}

impl LoadingProgress {
    /// State after `elapsed` time of both timers running from zero.
    pub fn at(elapsed: Duration) -> Self {
        let progress_ticks = elapsed.as_millis() / PROGRESS_INTERVAL.as_millis();
        let message_ticks = elapsed.as_millis() / MESSAGE_INTERVAL.as_millis();
        let percent = progress_ticks
            .saturating_mul(u128::from(PROGRESS_STEP))
            .min(u128::from(PROGRESS_CAP)) as u8;
        Self {
            percent,
            message_index: (message_ticks % LOADING_MESSAGES.len() as u128) as usize,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.message_index]
    }

    pub fn tick_progress(&mut self) {
        self.percent = self.percent.saturating_add(PROGRESS_STEP).min(PROGRESS_CAP);
    }

    pub fn tick_message(&mut self) {
        self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
    }
}

/// Two repeating timers feeding a [`LoadingProgress`]. Dropping the ticker
/// aborts both.
pub struct LoadingTicker {
    rx: watch::Receiver<LoadingProgress>,
    tasks: Vec<JoinHandle<()>>,
}

impl LoadingTicker {
    /// Must be called inside a tokio runtime.
    pub fn start() -> Self {
        let (tx, rx) = watch::channel(LoadingProgress::default());
        let tx = Arc::new(tx);

        let progress_tx = Arc::clone(&tx);
        let progress = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + PROGRESS_INTERVAL, PROGRESS_INTERVAL);
            loop {
                interval.tick().await;
                progress_tx.send_modify(LoadingProgress::tick_progress);
            }
        });

        let message = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + MESSAGE_INTERVAL, MESSAGE_INTERVAL);
            loop {
                interval.tick().await;
                tx.send_modify(LoadingProgress::tick_message);
            }
        });

        Self {
            rx,
            tasks: vec![progress, message],
        }
    }

    pub fn snapshot(&self) -> LoadingProgress {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadingProgress> {
        self.rx.clone()
    }
}

impl Drop for LoadingTicker {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/loading_tests.rs"]
mod tests;
