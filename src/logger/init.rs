use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use fern::log_file;
use log::LevelFilter;

use crate::logger::cleanup::cleanup_old_logs;

const RETENTION_DAYS: u64 = 60;

pub fn init_logger(level: LevelFilter, log_dir: Option<&Path>) -> bool {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    let mut file_error = None;
    if let Some(log_dir) = log_dir {
        let file_config_res = open_log_file(log_dir);
        match file_config_res {
            Ok(file_config) => dispatch = dispatch.chain(file_config),
            Err(e) => file_error = Some(e),
        }
    }

    let dispatcher_res = dispatch.apply();
    if let Err(e) = dispatcher_res {
        eprintln!("[init_logger] Unable to create logs dispatcher: {:?}", e);
        return false;
    }
    if let Some(e) = file_error {
        log::error!("[init_logger] Unable to create log file: {:?}", e);
        return false;
    }
    if let Some(log_dir) = log_dir {
        cleanup_old_logs(log_dir, Duration::from_secs(RETENTION_DAYS * 24 * 60 * 60));
    }
    true
}

fn open_log_file(log_dir: &Path) -> std::io::Result<std::fs::File> {
    let create_dir_res = std::fs::create_dir_all(log_dir);
    if let Err(e) = create_dir_res {
        eprintln!("[open_log_file] Unable to create logs dir: {:?}", e);
        return Err(e);
    }
    let log_file_path = log_dir.join(format!("{}.log", Utc::now().format("%Y-%m-%d_%H-%M-%S")));
    log_file(log_file_path)
}
