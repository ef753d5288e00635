use eyre::WrapErr;
use tracing::debug;
use url::Url;

use crate::request_failed::RequestFailed;

/// Longest body prefix quoted in a decode error.
pub const BODY_EXCERPT_LEN: usize = 512;

/// GET `url` with `Authorization: Bearer <bearer>` and decode the JSON body.
///
/// Transport and decode errors come back unchanged inside the report so
/// callers can downcast them. Non-2xx statuses become [`RequestFailed`].
pub async fn fetch<T>(client: &reqwest::Client, url: Url, bearer: &str) -> eyre::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    debug!("GET {} (bearer len={})", url, bearer.len());
    let res = client.get(url).bearer_auth(bearer).send().await?;

    let status = res.status();
    debug!("Status: {}", status);
    if !status.is_success() {
        return Err(RequestFailed { status }.into());
    }

    let res = res.text().await?;
    serde_json::from_str(&res)
        .wrap_err_with(|| format!("Failed to deserialize:\n{}", body_excerpt(&res)))
}

fn body_excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((end, _)) => format!("{}... ({} bytes total)", &body[..end], body.len()),
        None => body.to_string(),
    }
}
