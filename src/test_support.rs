use crate::service_configuration::Configuration;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub struct TestConfig {
    pub api_url: Url,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub request_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl TestConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: Url::parse(api_url).unwrap(),
            input_path: "email-list.txt".into(),
            output_path: "email-list-result.json".into(),
            request_delay: Duration::ZERO,
            request_timeout: Duration::from_secs(10),
            user_agent: "breach-checker-tests".into(),
        }
    }

    pub fn with_paths(api_url: &str, input_path: &Path, output_path: &Path) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::new(api_url)
        }
    }
}

impl Configuration for TestConfig {
    fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn request_delay(&self) -> Duration {
        self.request_delay
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
