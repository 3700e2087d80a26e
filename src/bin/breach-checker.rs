use breach_checker::cli::{parse_arguments, ParsedArguments};
use breach_checker::logging::init_logging;
use breach_checker::service::Service;
use breach_checker::service_configuration::{default_config_file_location, ServiceConfiguration};
use std::process::exit;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = match parse_arguments(std::env::args_os()) {
        ParsedArguments::Run(cli) => cli,
        ParsedArguments::Usage(usage) => {
            eprintln!("{usage}");
            exit(0)
        },
        ParsedArguments::Version(version) => {
            print!("{version}");
            exit(0)
        },
    };

    init_logging(cli.verbose);

    let config_file_location = cli.config.clone().or_else(default_config_file_location);

    match ServiceConfiguration::new(&cli, config_file_location.as_deref(), std::env::vars()) {
        Ok(config) => {
            match Service::execute(&config).await {
                Ok(_) => exit(0),
                Err(e) => {
                    error!(error = %e, "Breach check aborted");
                    eprintln!("{e}");
                    exit(2);
                }
            }
        },
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            eprintln!("{e}");
            exit(1);
        }
    }
}
