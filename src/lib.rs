//! Core library entry for the `preflight` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod platform;
pub mod ports;
pub mod readiness;
pub mod release;
pub mod settings;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["preflight", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_without_a_subcommand() {
        let result = run(["preflight"]);
        assert!(result.is_err());
    }
}
