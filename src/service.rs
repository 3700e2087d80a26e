use crate::breaches::BreachedAccounts;
use crate::email_source::EmailSource;
use crate::errors::AppResult;
use crate::lookup::{BreachLookup, HibpClient, LookupOutcome};
use crate::pacer::Pacer;
use crate::report::write_report;
use crate::service_configuration::Configuration;
use std::fmt;
use std::io::Write;
use tracing::{debug, info, warn};

#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub breached: usize,
    pub checked: usize,
    pub clean: usize,
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} emails checked: {} breached, {} clean, {} failed",
            self.checked,
            self.breached,
            self.clean,
            self.failed
        )
    }
}

pub struct Service;

impl Service {
    /// Checks every email against haveibeenpwned.com, printing progress to stdout.
    pub async fn execute<T>(config: &T) -> AppResult<RunSummary>
    where T: Configuration {
        let client = HibpClient::new(config)?;

        Self::run(config, &client, &mut std::io::stdout()).await
    }

    pub async fn run<T, L, W>(config: &T, lookup: &L, progress: &mut W) -> AppResult<RunSummary>
    where
        T: Configuration,
        L: BreachLookup,
        W: Write,
    {
        let emails = EmailSource::open(config.input_path())?;
        let pacer = Pacer::new(config.request_delay());
        let mut accounts = BreachedAccounts::new();
        let mut summary = RunSummary::default();

        info!(input = %config.input_path().display(), "Starting breach check");

        for email in emails {
            let email = email?;

            if let Err(e) = writeln!(progress, "Checking email: {email}") {
                debug!(error = %e, "Could not write progress line");
            }

            match lookup.lookup(&email).await {
                LookupOutcome::Breached(record) => {
                    debug!(%email, breaches = record.breaches.len(), "Account breached");
                    accounts.record(record);
                    summary.breached += 1;
                },
                LookupOutcome::Clean => {
                    debug!(%email, "No breaches");
                    summary.clean += 1;
                },
                LookupOutcome::Failed(e) => {
                    warn!(%email, error = %e, "Lookup failed, nothing recorded");
                    summary.failed += 1;
                },
            }

            summary.checked += 1;

            pacer.pause().await;
        }

        write_report(config.output_path(), &accounts)?;

        info!(output = %config.output_path().display(), "{summary}");

        Ok(summary)
    }
}


#[cfg(test)]
mod service_execute_tests {
    use super::*;
    use crate::test_support::TestConfig;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn checks_emails_against_the_service() {
        let server = MockServer::start().await;
        mount(&server, "a@x.com", ResponseTemplate::new(200).set_body_json(["SiteA", "SiteB"])).await;
        mount(&server, "b@x.com", ResponseTemplate::new(200).set_body_json(Vec::<String>::new())).await;

        let temp = TempDir::new().unwrap();
        let config = build_config(&server, &temp, "a@x.com\nb@x.com\n");

        let summary = Service::execute(&config).await.unwrap();

        assert_eq!(RunSummary { breached: 1, checked: 2, clean: 1, failed: 0 }, summary);
        temp.child("result.json").assert(
            r#"{"accounts":[{"breaches":["SiteA","SiteB"],"email":"a@x.com"}]}"#
        );
    }

    #[tokio::test]
    async fn keeps_going_after_a_network_failure() {
        let server = MockServer::start().await;
        mount(&server, "a@x.com", ResponseTemplate::new(200).set_body_json(["SiteA"])).await;
        mount(
            &server,
            "slow@x.com",
            ResponseTemplate::new(200)
                .set_body_json(["SiteS"])
                .set_delay(Duration::from_secs(5))
        ).await;
        mount(&server, "c@x.com", ResponseTemplate::new(200).set_body_json(["SiteC"])).await;

        let temp = TempDir::new().unwrap();
        let config = TestConfig {
            request_timeout: Duration::from_millis(200),
            ..build_config(&server, &temp, "a@x.com\nslow@x.com\nc@x.com\n")
        };

        let summary = Service::execute(&config).await.unwrap();

        assert_eq!(RunSummary { breached: 2, checked: 3, clean: 0, failed: 1 }, summary);
        temp.child("result.json").assert(concat!(
            r#"{"accounts":[{"breaches":["SiteA"],"email":"a@x.com"},"#,
            r#"{"breaches":["SiteC"],"email":"c@x.com"}]}"#
        ));
    }

    async fn mount(server: &MockServer, email: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/api/breachedaccount/{email}")))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn build_config(server: &MockServer, temp: &TempDir, emails: &str) -> TestConfig {
        let input = temp.child("email-list.txt");
        input.write_str(emails).unwrap();

        TestConfig::with_paths(&server.uri(), input.path(), &temp.path().join("result.json"))
    }
}
