use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

use super::commits::{scan_repository, ScanOutcome};
use super::repos::{list_repositories, RepoFilter};
use crate::error::{GogiError, Result};
use crate::github::gateway::RepoHost;
use crate::output::json::write_report;
use crate::utils::email_report::RepoEmailReport;
use crate::utils::exclusion::ExclusionList;
use crate::utils::summary::RepoSummary;

#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub account: String,
    pub filter: RepoFilter,
    pub exclusions: ExclusionList,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResults {
    pub reports: Vec<RepoEmailReport>,
    pub summary: RepoSummary,
    /// Full names of repositories whose scan failed.
    pub failed: Vec<String>,
}

/// Lists the account's repositories, scans each one, and writes the report.
///
/// Listing, report and cancellation errors end the run. A repository whose
/// scan fails is logged and left out of the results.
pub async fn run_scan(
    host: &dyn RepoHost,
    request: &ScanRequest,
    cancel: &CancellationToken,
) -> Result<ScanResults> {
    let (repos, summary) =
        list_repositories(host, &request.account, &request.filter, cancel).await?;

    let mut results = ScanResults {
        summary,
        ..ScanResults::default()
    };
    log::info!("[run_scan] Searching repository of user {}:", request.account);
    for repo in &repos {
        let outcome =
            scan_repository(host, &request.account, repo, &request.exclusions, cancel).await;
        match outcome {
            Ok(ScanOutcome::Found(report)) => results.reports.push(report),
            Ok(ScanOutcome::Empty) => continue,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                log::error!("[run_scan] {}", e);
                results.failed.push(repo.full_name().to_string());
            }
        }
    }

    if let Some(output_file) = &request.output {
        write_report(output_file, &results.reports)?;
    }
    Ok(results)
}
