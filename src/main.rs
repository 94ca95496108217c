use std::process::ExitCode;

use gogi::cli::Cli;
use gogi::config::Settings;
use gogi::logger;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env();

    let logs_init_status =
        logger::init::init_logger(settings.log_level, settings.log_dir.as_deref());
    if !logs_init_status {
        eprintln!("[main] Unable to set up file logger");
    }

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("[main] Interrupted, cancelling scan");
            ctrl_c_cancel.cancel();
        }
    });

    match cli.execute(&settings, &cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("[main] {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
