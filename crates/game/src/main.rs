use std::process::ExitCode;

use tracing::error;

mod app;

fn main() -> ExitCode {
    let config = match app::bootstrap::build_app() {
        Ok(config) => config,
        Err(error) => {
            error!(error = %error, "startup_failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = app::host::run_host(config) {
        error!(error = %error, "host_failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
