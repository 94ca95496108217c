use serde::de::Deserializer;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    name: String,
    owner: String,
    full_name: String,
    is_private: bool,
    is_fork: bool,
}

impl Repository {
    // Constructor
    pub fn new(name: String, owner: String, is_private: bool, is_fork: bool) -> Self {
        let full_name = format!("{}/{}", owner, name);
        Self {
            name,
            owner,
            full_name,
            is_private,
            is_fork,
        }
    }

    // Public getter methods
    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn owner(&self) -> &String {
        &self.owner
    }

    pub fn full_name(&self) -> &String {
        &self.full_name
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn is_fork(&self) -> bool {
        self.is_fork
    }
}

impl<'de> Deserialize<'de> for Repository {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: RawRepository = Deserialize::deserialize(deserializer)?;
        let full_name = raw
            .full_name
            .unwrap_or_else(|| format!("{}/{}", raw.owner.login, raw.name));
        Ok(Repository {
            name: raw.name,
            owner: raw.owner.login,
            full_name,
            is_private: raw.private,
            is_fork: raw.fork,
        })
    }
}

#[derive(Deserialize)]
struct RawRepository {
    name: String,
    full_name: Option<String>,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    fork: bool,
    owner: RawOwner,
}

#[derive(Deserialize)]
struct RawOwner {
    login: String,
}
