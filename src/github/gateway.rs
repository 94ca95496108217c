use async_trait::async_trait;

use crate::error::GatewayError;
use crate::utils::commit::CommitRecord;
use crate::utils::repo::Repository;

/// Opaque position in a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCursor(u32);

impl PageCursor {
    pub fn first() -> Self {
        PageCursor(1)
    }

    pub fn page(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PageCursor {
    fn from(page: u32) -> Self {
        PageCursor(page)
    }
}

/// One page of results plus the cursor of the following page, if any.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<PageCursor>,
}

/// Read-only access to a repository hosting service.
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// Repositories owned by `account`, sorted by full name.
    async fn list_repositories(
        &self,
        account: &str,
        cursor: PageCursor,
    ) -> Result<Page<Repository>, GatewayError>;

    /// Commits of `owner/repo_name`, newest first.
    async fn list_commits(
        &self,
        owner: &str,
        repo_name: &str,
        cursor: PageCursor,
    ) -> Result<Page<CommitRecord>, GatewayError>;
}
