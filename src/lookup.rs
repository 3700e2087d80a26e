use crate::breaches::BreachRecord;
use crate::errors::AppResult;
use crate::service_configuration::Configuration;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

const BREACHED_ACCOUNT_PATH: [&str; 2] = ["api", "breachedaccount"];

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0} can not carry a request path")]
    UnusableBaseUrl(String),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Service responded with {0}")]
    UnexpectedStatus(StatusCode),
    #[error("Response is not a list of breach names: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of checking one email. Clean and failed lookups are kept apart so
/// that a failure is never mistaken for an account without breaches.
#[derive(Debug)]
pub enum LookupOutcome {
    Breached(BreachRecord),
    Clean,
    Failed(LookupError),
}

impl LookupOutcome {
    pub fn from_record(record: BreachRecord) -> Self {
        if record.is_breached() {
            Self::Breached(record)
        } else {
            Self::Clean
        }
    }
}

#[async_trait]
pub trait BreachLookup {
    async fn lookup(&self, email: &str) -> LookupOutcome;
}

#[derive(Debug)]
pub struct HibpClient {
    base_url: Url,
    client: reqwest::Client,
}

impl HibpClient {
    pub fn new<T>(config: &T) -> AppResult<Self>
    where T: Configuration {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { base_url: config.api_url().clone(), client })
    }

    pub fn breached_account_url(&self, email: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| LookupError::UnusableBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(BREACHED_ACCOUNT_PATH)
            .push(email);

        Ok(url)
    }

    pub async fn fetch_breaches(&self, email: &str) -> Result<BreachRecord, LookupError> {
        let url = self.breached_account_url(email)?;

        debug!(%url, "Requesting breaches");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(BreachRecord::new(email, vec![]));
        }

        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        let breaches: Vec<String> = serde_json::from_slice(&body)?;

        Ok(BreachRecord::new(email, breaches))
    }
}

#[async_trait]
impl BreachLookup for HibpClient {
    async fn lookup(&self, email: &str) -> LookupOutcome {
        match self.fetch_breaches(email).await {
            Ok(record) => LookupOutcome::from_record(record),
            Err(e) => LookupOutcome::Failed(e),
        }
    }
}
