use futures_util::TryStreamExt;
use tokio_util::sync::CancellationToken;

use crate::error::{GatewayError, GogiError, Result};
use crate::github::gateway::RepoHost;
use crate::github::pagination::paginate;
use crate::utils::repo::Repository;
use crate::utils::summary::RepoSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoFilter {
    pub include_public: bool,
    pub include_private: bool,
    pub exclude_forks: bool,
}

impl Default for RepoFilter {
    fn default() -> Self {
        Self {
            include_public: true,
            include_private: true,
            exclude_forks: true,
        }
    }
}

impl RepoFilter {
    /// Counts `repo` into `summary` and reports whether it should be scanned.
    ///
    /// Forks are counted before visibility, so an excluded fork never shows
    /// up in the public or private totals.
    pub fn classify(&self, repo: &Repository, summary: &mut RepoSummary) -> bool {
        if self.exclude_forks && repo.is_fork() {
            summary.forks += 1;
            return false;
        }
        if repo.is_private() {
            if self.include_private {
                summary.private += 1;
                return true;
            }
            return false;
        }
        if self.include_public {
            summary.public += 1;
            return true;
        }
        false
    }
}

/// Lists every repository of `account` and keeps those passing `filter`.
///
/// Any failed page aborts the listing; nothing collected so far is returned.
pub async fn list_repositories(
    host: &dyn RepoHost,
    account: &str,
    filter: &RepoFilter,
    cancel: &CancellationToken,
) -> Result<(Vec<Repository>, RepoSummary)> {
    let mut all_repos = Vec::<Repository>::new();
    let mut summary = RepoSummary::default();

    let pages = paginate(
        |cursor| host.list_repositories(account, cursor),
        cancel.clone(),
    );
    let mut pages = std::pin::pin!(pages);
    loop {
        let repos = match pages.try_next().await {
            Ok(Some(repos)) => repos,
            Ok(None) => break,
            Err(GatewayError::Cancelled) => return Err(GogiError::Cancelled),
            Err(source) => {
                log::error!(
                    "[list_repositories] Unable to list repositories of {}: {}",
                    account,
                    source
                );
                return Err(GogiError::Listing {
                    account: account.to_string(),
                    source,
                });
            }
        };
        for repo in repos {
            if filter.classify(&repo, &mut summary) {
                all_repos.push(repo);
            } else {
                log::debug!("[list_repositories] Skipping {}", repo.full_name());
            }
        }
    }

    summary.total = all_repos.len();
    log::debug!("[list_repositories] {} summary = {:?}", account, &summary);
    Ok((all_repos, summary))
}
