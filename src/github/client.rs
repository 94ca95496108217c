use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::config::{extract_next_page, prepare_headers};
use super::gateway::{Page, PageCursor, RepoHost};
use crate::config::Credential;
use crate::error::GatewayError;
use crate::utils::commit::CommitRecord;
use crate::utils::repo::Repository;
use crate::utils::reqwest_client::get_client;

pub const PER_PAGE: u32 = 100;

/// Authenticated handle to the GitHub REST API.
pub struct GithubHost {
    client: Arc<Client>,
    base_url: String,
    headers: HeaderMap,
}

impl GithubHost {
    pub fn connect(credential: &Credential, base_url: &str) -> Result<Self, GatewayError> {
        let headers = prepare_headers(credential.token())?;
        let client = get_client()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Page<T>, GatewayError> {
        log::debug!("[get_page] GET {} {:?}", url, params);
        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?;
        let response = check_status(response, url)?;
        let next = extract_next_page(&response).map(PageCursor::from);
        let items = response.json::<Vec<T>>().await?;
        Ok(Page { items, next })
    }
}

fn check_status(response: Response, url: &str) -> Result<Response, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        log::error!(
            "[check_status] Failed to call Github API {}, status: {}",
            url,
            status
        );
        return Err(GatewayError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

#[async_trait]
impl RepoHost for GithubHost {
    async fn list_repositories(
        &self,
        account: &str,
        cursor: PageCursor,
    ) -> Result<Page<Repository>, GatewayError> {
        let url = format!("{}/users/{}/repos", self.base_url, account);
        let params = [
            ("type", "all".to_string()),
            ("sort", "full_name".to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("page", cursor.page().to_string()),
        ];
        self.get_page(&url, &params).await
    }

    async fn list_commits(
        &self,
        owner: &str,
        repo_name: &str,
        cursor: PageCursor,
    ) -> Result<Page<CommitRecord>, GatewayError> {
        let url = format!("{}/repos/{}/{}/commits", self.base_url, owner, repo_name);
        let params = [
            ("per_page", PER_PAGE.to_string()),
            ("page", cursor.page().to_string()),
        ];
        self.get_page(&url, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_trims_base_url() {
        let credential = Credential::new("ghp_test".to_string());
        let host = GithubHost::connect(&credential, "https://ghe.local/api/v3/").unwrap();
        assert_eq!(host.base_url(), "https://ghe.local/api/v3");
    }

    #[test]
    fn test_connect_rejects_unusable_token() {
        let credential = Credential::new("ghp\r\nX-Injected: 1".to_string());
        assert!(matches!(
            GithubHost::connect(&credential, "https://api.github.com"),
            Err(GatewayError::InvalidHeader(_))
        ));
    }
}
