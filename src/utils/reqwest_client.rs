use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::Client;

use crate::error::GatewayError;

pub const USER_AGENT: &str = concat!("gogi/", env!("CARGO_PKG_VERSION"));

static CLIENT: OnceCell<Arc<Client>> = OnceCell::new();

/// Process-wide HTTP transport, built on first use and shared afterwards.
pub fn get_client() -> Result<Arc<Client>, GatewayError> {
    let client = CLIENT.get_or_try_init(|| {
        log::debug!("[get_client] Building shared http client");
        Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map(Arc::new)
    })?;
    Ok(Arc::clone(client))
}
