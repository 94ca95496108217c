use futures_util::TryStreamExt;
use tokio_util::sync::CancellationToken;

use crate::error::{GatewayError, GogiError, Result};
use crate::github::gateway::RepoHost;
use crate::github::pagination::paginate;
use crate::utils::email_report::RepoEmailReport;
use crate::utils::exclusion::ExclusionList;
use crate::utils::repo::Repository;

/// Result of a repository scan that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(RepoEmailReport),
    /// No commit carried a non-excluded author email.
    Empty,
}

/// Groups the commit hashes of `repo` by author email.
///
/// Commits without an author email and commits by excluded emails are
/// skipped. Any failed page aborts the scan of this repository.
pub async fn scan_repository(
    host: &dyn RepoHost,
    account: &str,
    repo: &Repository,
    exclusions: &ExclusionList,
    cancel: &CancellationToken,
) -> Result<ScanOutcome> {
    let mut report = RepoEmailReport::new(repo.full_name().to_string());

    let pages = paginate(
        |cursor| host.list_commits(repo.owner(), repo.name(), cursor),
        cancel.clone(),
    );
    let mut pages = std::pin::pin!(pages);
    loop {
        let commits = match pages.try_next().await {
            Ok(Some(commits)) => commits,
            Ok(None) => break,
            Err(GatewayError::Cancelled) => return Err(GogiError::Cancelled),
            Err(source) => {
                return Err(GogiError::Scan {
                    repo: repo.full_name().to_string(),
                    source,
                })
            }
        };
        log::info!(
            "[scan_repository] Looking {}'s repository: {}/{}",
            account,
            repo.owner(),
            repo.name()
        );
        for commit in commits {
            let email = commit.author_email();
            if email.is_empty() || exclusions.contains(email) {
                continue;
            }
            log::info!(
                "[scan_repository] Found mail {} in commit {}",
                email,
                commit.sha()
            );
            report.record(email, commit.sha());
        }
    }

    if report.is_empty() {
        log::debug!(
            "[scan_repository] No qualifying emails in {}",
            repo.full_name()
        );
        return Ok(ScanOutcome::Empty);
    }
    Ok(ScanOutcome::Found(report))
}
