//! Binary entrypoint for the `preflight` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Railway tokens and app secrets flow to child processes via .env.
    let _ = dotenvy::dotenv();
    match preflight::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
