use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{error, info};

use crate::error::PollError;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of raw homework-status responses, keyed by a `from_date` cursor.
/// The poll loop only ever talks to this trait.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PollError>;
}

#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        let base_url = Url::parse(ENDPOINT).expect("valid default endpoint URL");
        Self::with_base_url(token, base_url)
    }

    pub fn with_base_url(token: String, base_url: Url) -> Self {
        let http = Client::builder()
            .user_agent("hw-watchbot/0.1")
            .no_proxy()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url,
            token,
        }
    }

    pub fn build_request(&self, from_date: i64) -> Result<reqwest::Request, PollError> {
        self.http
            .get(self.base_url.clone())
            .query(&[("from_date", from_date)])
            .header("Authorization", format!("OAuth {}", self.token))
            .build()
            .map_err(|err| PollError::RemoteUnavailable(err.to_string()))
    }

    /// GET the status endpoint and decode the body. Returns the decoded JSON
    /// as-is; shape checks belong to `homework::check_response`.
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PollError> {
        let request = self.build_request(from_date)?;
        let res = self.http.execute(request).await.map_err(|err| {
            if err.is_timeout() {
                error!(from_date, "review API request timed out");
                PollError::Timeout
            } else {
                error!(from_date, %err, "review API is unreachable");
                PollError::RemoteUnavailable(err.to_string())
            }
        })?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            error!("review API error {}: {}", status, body);
            return Err(PollError::RemoteUnavailable(format!("status {}", status)));
        }

        let body = res.text().await.map_err(|err| {
            error!(%err, "failed to read review API response");
            PollError::RemoteUnavailable(err.to_string())
        })?;
        let payload: Value = serde_json::from_str(&body).map_err(|err| {
            error!(%err, "review API returned a non-JSON body");
            PollError::MalformedPayload(err.to_string())
        })?;

        info!(from_date, "fetched homework statuses");
        Ok(payload)
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PollError> {
        PracticumClient::fetch_statuses(self, from_date).await
    }
}
