pub mod breaches;
pub mod cli;
pub mod email_source;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod pacer;
pub mod report;
pub mod service;
pub mod service_configuration;
#[cfg(test)]
pub mod test_support;
