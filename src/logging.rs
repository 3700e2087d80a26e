use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
mod default_directive_tests {
    use super::*;

    #[test]
    fn logs_info_by_default() {
        assert_eq!("breach_checker=info", default_directive(false));
    }

    #[test]
    fn logs_debug_when_verbose() {
        assert_eq!("breach_checker=debug", default_directive(true));
    }
}

/// Logs go to stderr; stdout is left for progress lines. `RUST_LOG` wins
/// over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };

    format!("breach_checker={level}")
}
