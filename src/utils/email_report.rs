use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    email: String,
    commits: Vec<String>,
}

impl EmailRecord {
    pub fn new(email: String) -> Self {
        Self {
            email,
            commits: Vec::new(),
        }
    }

    pub fn email(&self) -> &String {
        &self.email
    }

    pub fn commits(&self) -> &Vec<String> {
        &self.commits
    }

    pub fn push_commit(&mut self, sha: String) {
        self.commits.push(sha);
    }
}

/// Commit hashes grouped by author email for a single repository.
///
/// Emails are kept in a sorted map so that serializing the same report
/// twice produces the same bytes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RepoEmailReport {
    repo_name: String,
    emails: BTreeMap<String, EmailRecord>,
}

impl RepoEmailReport {
    pub fn new(repo_name: String) -> Self {
        Self {
            repo_name,
            emails: BTreeMap::new(),
        }
    }

    pub fn repo_name(&self) -> &String {
        &self.repo_name
    }

    pub fn emails(&self) -> &BTreeMap<String, EmailRecord> {
        &self.emails
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Appends `sha` to the record for `email`, creating it on first sighting.
    pub fn record(&mut self, email: &str, sha: &str) {
        self.emails
            .entry(email.to_string())
            .or_insert_with(|| EmailRecord::new(email.to_string()))
            .push_commit(sha.to_string());
    }
}
