//! Login Module - Entry Point
//!
//! Console front-end for the login form and dashboard.

use log::info;
use tokio::io::{BufReader, stdin, stdout};

use login_module::error::handlers::{error_to_exit_code, handle_error};
use login_module::{AppConfig, AppError, Console};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching login module...");

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let mut console = Console::new(config);
    console.run(BufReader::new(stdin()), stdout()).await
}
