use reqwest::header::{self, HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Response;

use crate::error::GatewayError;

pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

pub fn prepare_headers(access_token: &str) -> Result<HeaderMap, GatewayError> {
    let mut headers = HeaderMap::new();

    let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", access_token))
        .map_err(|e| {
            log::error!("[prepare_headers] Invalid auth header: {:?}", e);
            GatewayError::InvalidHeader("Authorization".to_string())
        })?;
    auth_header.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_header);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        "X-GitHub-Api-Version",
        HeaderValue::from_static("2022-11-28"),
    );
    Ok(headers)
}

pub fn extract_next_page(response: &Response) -> Option<u32> {
    let link_header = response.headers().get(header::LINK)?;
    let header_value = link_header.to_str().ok()?;
    parse_next_page(header_value)
}

/// Page number of the `rel="next"` entry of a GitHub `Link` header.
///
/// `<https://api.github.com/user/1/repos?page=2>; rel="next", <...?page=5>; rel="last"`
pub fn parse_next_page(link_header: &str) -> Option<u32> {
    let next_link_part = link_header
        .split(',')
        .find(|part| part.contains(r#"rel="next""#))?;
    let url = next_link_part
        .split(';')
        .next()
        .map(|url| url.trim_matches(&[' ', '<', '>', '"'] as &[_]))?;
    page_param(url)
}

fn page_param(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|param| param.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
}
