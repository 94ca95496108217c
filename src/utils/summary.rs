/// Counts accumulated while listing an account's repositories.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepoSummary {
    pub total: usize,
    pub public: usize,
    pub private: usize,
    pub forks: usize,
}
