use response_times::commands::Cli;
use response_times::msg_error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
