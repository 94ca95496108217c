use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{GogiError, ReportError, Result};
use crate::utils::email_report::RepoEmailReport;

/// Replaces `output_file` with the pretty-printed JSON array of `reports`.
///
/// The document is written to a temporary file next to the destination and
/// renamed over it, so a failed write never leaves a truncated report.
pub fn write_report(output_file: &Path, reports: &[RepoEmailReport]) -> Result<()> {
    persist_json(output_file, reports).map_err(|source| {
        log::error!(
            "[write_report] Unable to write {}: {}",
            output_file.display(),
            source
        );
        GogiError::ReportWrite {
            path: output_file.to_path_buf(),
            source,
        }
    })?;
    log::info!(
        "[write_report] Data written successfully to {}",
        output_file.display()
    );
    Ok(())
}

fn persist_json(output_file: &Path, reports: &[RepoEmailReport]) -> std::result::Result<(), ReportError> {
    let json_data = serde_json::to_vec_pretty(reports)?;
    let dir = match output_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(&json_data)?;
    temp_file.write_all(b"\n")?;
    if let Some(permissions) = report_permissions(output_file)? {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(output_file)?;
    Ok(())
}

/// Mode of the report being replaced, or 0644 for a new report.
fn report_permissions(output_file: &Path) -> std::io::Result<Option<Permissions>> {
    match fs::metadata(output_file) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(new_report_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn new_report_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_report_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use std::fs;

    fn sample_reports() -> Vec<RepoEmailReport> {
        let mut pub_report = RepoEmailReport::new("alice/pub".to_string());
        pub_report.record("a@x.com", "c3");
        pub_report.record("z@x.com", "c2");
        pub_report.record("a@x.com", "c1");
        let mut tool_report = RepoEmailReport::new("alice/tool".to_string());
        tool_report.record("b@y.org", "d1");
        vec![pub_report, tool_report]
    }

    #[test]
    fn test_empty_results_write_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_report(&path, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn test_round_trip_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let reports = sample_reports();
        write_report(&path, &reports).unwrap();

        let parsed: Vec<RepoEmailReport> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let as_map = |reports: &[RepoEmailReport]| -> BTreeMap<String, BTreeMap<String, Vec<String>>> {
            reports
                .iter()
                .map(|r| {
                    let emails = r
                        .emails()
                        .iter()
                        .map(|(email, record)| (email.clone(), record.commits().clone()))
                        .collect();
                    (r.repo_name().clone(), emails)
                })
                .collect()
        };
        assert_eq!(as_map(parsed.as_slice()), as_map(reports.as_slice()));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "x".repeat(4096)).unwrap();
        write_report(&path, &sample_reports()).unwrap();
        write_report(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_same_input_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        write_report(&first, &sample_reports()).unwrap();
        write_report(&second, &sample_reports()).unwrap();
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_missing_directory_is_report_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_report(&path, &sample_reports()).unwrap_err();
        assert!(matches!(err, GogiError::ReportWrite { .. }));
        assert!(err.is_fatal());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_report_mode_is_kept_on_overwrite() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        write_report(&path, &sample_reports()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_report_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_report(&path, &[]).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
