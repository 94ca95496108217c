use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::gateway::{Page, PageCursor, RepoHost};
use crate::error::GatewayError;
use crate::utils::commit::CommitRecord;
use crate::utils::repo::Repository;

/// In-memory host serving pre-split pages. A `None` page fails with a 500.
#[derive(Default)]
pub struct MemoryHost {
    repos: HashMap<String, Vec<Option<Vec<Repository>>>>,
    commits: HashMap<String, Vec<Option<Vec<CommitRecord>>>>,
    requests: Mutex<Vec<String>>,
}

impl MemoryHost {
    pub fn with_repo_pages(mut self, account: &str, pages: Vec<Option<Vec<Repository>>>) -> Self {
        self.repos.insert(account.to_string(), pages);
        self
    }

    pub fn with_commit_pages(
        mut self,
        full_name: &str,
        pages: Vec<Option<Vec<CommitRecord>>>,
    ) -> Self {
        self.commits.insert(full_name.to_string(), pages);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn serve<T: Clone>(
        &self,
        key: &str,
        pages: Option<&Vec<Option<Vec<T>>>>,
        cursor: PageCursor,
    ) -> Result<Page<T>, GatewayError> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{}?page={}", key, cursor.page()));
        let Some(pages) = pages else {
            return Ok(Page {
                items: Vec::new(),
                next: None,
            });
        };
        let index = cursor.page() as usize - 1;
        match pages.get(index) {
            Some(Some(items)) => Ok(Page {
                items: items.clone(),
                next: (index + 1 < pages.len()).then(|| PageCursor::from(cursor.page() + 1)),
            }),
            _ => Err(GatewayError::Status {
                status: 500,
                url: key.to_string(),
            }),
        }
    }
}

#[async_trait]
impl RepoHost for MemoryHost {
    async fn list_repositories(
        &self,
        account: &str,
        cursor: PageCursor,
    ) -> Result<Page<Repository>, GatewayError> {
        self.serve(&format!("users/{}/repos", account), self.repos.get(account), cursor)
    }

    async fn list_commits(
        &self,
        owner: &str,
        repo_name: &str,
        cursor: PageCursor,
    ) -> Result<Page<CommitRecord>, GatewayError> {
        let full_name = format!("{}/{}", owner, repo_name);
        self.serve(
            &format!("repos/{}/commits", full_name),
            self.commits.get(&full_name),
            cursor,
        )
    }
}

pub fn repo(owner: &str, name: &str, is_private: bool, is_fork: bool) -> Repository {
    Repository::new(name.to_string(), owner.to_string(), is_private, is_fork)
}

pub fn commit(sha: &str, email: &str) -> CommitRecord {
    CommitRecord::new(sha.to_string(), email.to_string())
}
