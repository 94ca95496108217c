use serde::de::Deserializer;
use serde::Deserialize;

/// A commit as seen by the email scan: its hash and the author email.
///
/// Commits whose author (or author email) is missing carry an empty email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    sha: String,
    author_email: String,
}

impl CommitRecord {
    pub fn new(sha: String, author_email: String) -> Self {
        Self { sha, author_email }
    }

    pub fn sha(&self) -> &String {
        &self.sha
    }

    pub fn author_email(&self) -> &String {
        &self.author_email
    }
}

impl<'de> Deserialize<'de> for CommitRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: RawCommit = Deserialize::deserialize(deserializer)?;
        let author_email = raw
            .commit
            .and_then(|c| c.author)
            .and_then(|a| a.email)
            .unwrap_or_default();
        Ok(CommitRecord {
            sha: raw.sha,
            author_email,
        })
    }
}

#[derive(Deserialize)]
struct RawCommit {
    sha: String,
    commit: Option<RawCommitDetail>,
}

#[derive(Deserialize)]
struct RawCommitDetail {
    author: Option<RawGitAuthor>,
}

#[derive(Deserialize)]
struct RawGitAuthor {
    email: Option<String>,
}
