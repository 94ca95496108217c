use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Removes `.log` files in `logs_dir` last modified more than `retention_period` ago.
pub fn cleanup_old_logs(logs_dir: &Path, retention_period: Duration) -> usize {
    let entries_res = fs::read_dir(logs_dir);
    let entries = match entries_res {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("[cleanup_old_logs] Unable to read logs dir: {:?}", e);
            return 0;
        }
    };
    let current_time = SystemTime::now();

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "log") {
            continue;
        }
        let modified_res = entry.metadata().and_then(|metadata| metadata.modified());
        let modified_time = match modified_res {
            Ok(modified_time) => modified_time,
            Err(e) => {
                log::error!(
                    "[cleanup_old_logs] Unable to get last modified time of {}: {:?}",
                    path.display(),
                    e
                );
                continue;
            }
        };
        // Files stamped in the future are kept.
        let Ok(elapsed) = current_time.duration_since(modified_time) else {
            continue;
        };
        if elapsed <= retention_period {
            continue;
        }
        let remove_res = fs::remove_file(&path);
        match remove_res {
            Ok(()) => removed += 1,
            Err(e) => log::error!(
                "[cleanup_old_logs] Unable to remove old log file {}: {:?}",
                path.display(),
                e
            ),
        }
    }
    removed
}
