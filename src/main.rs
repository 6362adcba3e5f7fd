//! Binary entrypoint for the `daily` CLI.

use std::process::ExitCode;

use daily_sites::DailyError;

fn main() -> ExitCode {
    // A .env file may supply DAILY_SEED and RUST_LOG; it is optional.
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(err) if err.not_found() => {}
        Err(err) => {
            eprintln!("error: failed to load .env: {err}");
            return ExitCode::FAILURE;
        }
    }

    match daily_sites::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DailyError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
