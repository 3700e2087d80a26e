use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const APP_NAME: &str = "breach_checker";
pub const DEFAULT_API_URL: &str = "https://haveibeenpwned.com";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 2000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("breach-checker/", env!("CARGO_PKG_VERSION"));

const API_URL_ENV_VAR: &str = "BREACH_CHECKER_API_URL";
const REQUEST_DELAY_ENV_VAR: &str = "BREACH_CHECKER_REQUEST_DELAY_MS";

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub request_delay_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

pub trait Configuration {
    fn api_url(&self) -> &Url;

    fn input_path(&self) -> &Path;

    fn output_path(&self) -> &Path;

    fn request_delay(&self) -> Duration;

    fn request_timeout(&self) -> Duration;

    fn user_agent(&self) -> &str;
}

#[derive(Debug, Error, PartialEq)]
pub enum ServiceConfigurationError {
    #[error("Error reading configuration file {0}")]
    ConfigFileReadError(String),
    #[error("{0} is not a usable API url")]
    InvalidApiUrl(String),
    #[error("{name} must be a whole number, not '{value}'")]
    InvalidNumber { name: String, value: String },
}

#[derive(Debug, PartialEq)]
pub struct ServiceConfiguration {
    api_url: Url,
    input_path: PathBuf,
    output_path: PathBuf,
    request_delay: Duration,
    request_timeout: Duration,
    user_agent: String,
}


impl ServiceConfiguration {
    /// Layers built-in defaults, the config file and env vars, in that order.
    pub fn new<I>(
        cli_parameters: &Cli,
        config_file_location: Option<&Path>,
        env_vars_iterator: I
    ) -> Result<Self, ServiceConfigurationError>
    where I: Iterator<Item = (String, String)>
    {
        let config_file = Self::load_config_file(config_file_location)?;
        let env_vars: HashMap<String, String> = env_vars_iterator.collect();

        let api_url = Self::extract_optional_env_var(&env_vars, API_URL_ENV_VAR)
            .or_else(|| non_empty(config_file.api_url))
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        let request_delay_ms = match Self::extract_optional_env_var(&env_vars, REQUEST_DELAY_ENV_VAR) {
            Some(value) => parse_number(REQUEST_DELAY_ENV_VAR, &value)?,
            None => config_file.request_delay_ms.unwrap_or(DEFAULT_REQUEST_DELAY_MS),
        };

        Ok(Self {
            api_url: parse_api_url(&api_url)?,
            input_path: cli_parameters.input.clone(),
            output_path: cli_parameters.output.clone(),
            request_delay: Duration::from_millis(request_delay_ms),
            request_timeout: Duration::from_secs(
                config_file.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            ),
            user_agent: non_empty(config_file.user_agent)
                .unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
        })
    }

    fn load_config_file(location: Option<&Path>) -> Result<FileConfig, ServiceConfigurationError> {
        match location {
            // confy writes out a default file when asked to load a missing one
            Some(path) if path.exists() => {
                confy::load_path::<FileConfig>(path).map_err(|_| {
                    ServiceConfigurationError::ConfigFileReadError(path.display().to_string())
                })
            },
            _ => Ok(FileConfig::default()),
        }
    }

    fn extract_optional_env_var(
        vars: &HashMap<String, String>,
        var_name: &str
    ) -> Option<String> {
        vars.get(var_name).filter(|val| !val.is_empty()).cloned()
    }
}

impl Configuration for ServiceConfiguration {
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

pub fn default_config_file_location() -> Option<PathBuf> {
    confy::get_configuration_file_path(APP_NAME, None).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_number(name: &str, value: &str) -> Result<u64, ServiceConfigurationError> {
    value.trim().parse().map_err(|_| ServiceConfigurationError::InvalidNumber {
        name: name.into(),
        value: value.into(),
    })
}

fn parse_api_url(value: &str) -> Result<Url, ServiceConfigurationError> {
    match Url::parse(value) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(ServiceConfigurationError::InvalidApiUrl(value.into())),
    }
}
