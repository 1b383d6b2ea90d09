//! The fetch-validate-format-notify loop.
use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::PollError;
use crate::homework;
use crate::notify::{self, Messenger};
use crate::practicum::StatusSource;

pub struct Poller<S, M> {
    source: S,
    messenger: M,
    interval: Duration,
    cursor: i64,
    last_error_message: Option<String>,
}

impl<S: StatusSource, M: Messenger> Poller<S, M> {
    pub fn new(source: S, messenger: M, interval: Duration) -> Self {
        Self {
            source,
            messenger,
            interval,
            cursor: Utc::now().timestamp(),
            last_error_message: None,
        }
    }

    pub async fn run(mut self) {
        info!(interval_secs = self.interval.as_secs(), "starting poll loop");
        loop {
            self.run_once().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One full pass over the pipeline. This is the only place a
    /// `PollError` becomes a notification; consecutive identical failure
    /// texts are reported once.
    pub async fn run_once(&mut self) {
        if let Err(err) = self.poll_iteration().await {
            let text = format!("Program failure: {}", err);
            warn!(text, "poll iteration failed");
            if self.last_error_message.as_deref() != Some(text.as_str()) {
                notify::send_message(&self.messenger, &text).await;
            }
            self.last_error_message = Some(text);
        }
    }

    async fn poll_iteration(&mut self) -> Result<(), PollError> {
        let response = self.source.fetch_statuses(self.cursor).await?;
        // Advance before processing: a failure below must not cause the
        // next iteration to re-fetch this window.
        self.cursor = Utc::now().timestamp();
        let homeworks = homework::check_response(&response)?;
        for hw in homeworks {
            let text = homework::parse_status(hw)?;
            notify::send_message(&self.messenger, &text).await;
        }
        Ok(())
    }
}
