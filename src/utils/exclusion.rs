use std::collections::HashSet;

/// Author emails to leave out of every scan, matched case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct ExclusionList {
    emails: HashSet<String>,
}

impl ExclusionList {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .map(|email| email.as_ref().to_lowercase())
            .collect();
        Self { emails }
    }

    pub fn contains(&self, email: &str) -> bool {
        !self.emails.is_empty() && self.emails.contains(&email.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
