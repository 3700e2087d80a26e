use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_INPUT_FILE: &str = "email-list.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "email-list-result.json";

#[derive(Debug, Parser, PartialEq)]
#[command(
    name = "breach-checker",
    about = "Checks a list of email addresses against haveibeenpwned.com",
    version
)]
pub struct Cli {
    /// Input file with one email per line
    #[arg(short = 'i', long = "i", value_name = "PATH", default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Output file with the result
    #[arg(short = 'o', long = "o", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Configuration file (defaults to the per-user configuration location)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq)]
pub enum ParsedArguments {
    Run(Cli),
    Usage(String),
    Version(String),
}


/// Help, unknown flags and missing values all resolve to the usage text so
/// that the caller can print it and exit cleanly.
pub fn parse_arguments<I, T>(args: I) -> ParsedArguments
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ParsedArguments::Run(cli),
        Err(e) if e.kind() == ErrorKind::DisplayVersion => ParsedArguments::Version(e.to_string()),
        Err(_) => ParsedArguments::Usage(usage()),
    }
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
