use quickbite::config::VendorConfig;
use quickbite::console::{Console, LineReader};
use quickbite::lifecycle::{setup_tracing, Session};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    setup_tracing();

    let config = VendorConfig::default();
    let console = Console::new(LineReader::stdin(), std::io::stdout());

    match Session::new(&config, console).run() {
        Ok(()) => {
            info!("Exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            println!("Oops! Something went wrong: {e}");
            ExitCode::FAILURE
        }
    }
}
