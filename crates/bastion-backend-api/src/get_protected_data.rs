use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::backend_url::BackendUrl;
use crate::bearer_token::BearerToken;
use crate::fetch::fetch;
use crate::token_provider::TokenProvider;

pub const PROTECTED_PATH: &str = "protected";

/// Reads the backend's protected resource using whatever token the auth
/// client holds at call time.
pub struct ProtectedResourceFetcher<P> {
    client: reqwest::Client,
    backend_url: BackendUrl,
    tokens: P,
}

impl<P: TokenProvider> ProtectedResourceFetcher<P> {
    pub fn new(backend_url: BackendUrl, tokens: P) -> Self {
        Self::with_client(reqwest::Client::new(), backend_url, tokens)
    }

    pub fn with_client(client: reqwest::Client, backend_url: BackendUrl, tokens: P) -> Self {
        Self {
            client,
            backend_url,
            tokens,
        }
    }

    pub fn backend_url(&self) -> &BackendUrl {
        &self.backend_url
    }

    pub async fn fetch_protected_data(&self) -> eyre::Result<Value> {
        self.fetch_protected_data_as().await
    }

    pub async fn fetch_protected_data_as<T: DeserializeOwned>(&self) -> eyre::Result<T> {
        get_protected(&self.client, &self.backend_url, &self.tokens).await
    }
}

/// One-off `GET {backend}/protected` on a fresh client.
pub async fn fetch_protected_data(
    backend_url: &BackendUrl,
    tokens: &impl TokenProvider,
) -> eyre::Result<Value> {
    get_protected(&reqwest::Client::new(), backend_url, tokens).await
}

async fn get_protected<T: DeserializeOwned>(
    client: &reqwest::Client,
    backend_url: &BackendUrl,
    tokens: &impl TokenProvider,
) -> eyre::Result<T> {
    let url = backend_url.endpoint(PROTECTED_PATH)?;
    let bearer = match tokens.current_token() {
        Some(BearerToken(token)) => token,
        None => {
            debug!("No token held, sending {:?}", BearerToken::UNDEFINED);
            BearerToken::UNDEFINED.to_string()
        }
    };
    fetch(client, url, &bearer).await
}
