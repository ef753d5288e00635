use eyre::WrapErr;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/";
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Base address of the backend. The path always ends in `/` so joined
/// endpoints keep any prefix the base carries.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendUrl(Url);

impl BackendUrl {
    pub fn parse(input: &str) -> eyre::Result<Self> {
        let url = Url::parse(input).wrap_err_with(|| format!("Invalid backend URL: {}", input))?;
        Ok(Self::from(url))
    }

    /// Reads `BACKEND_URL`, falling back to the default.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        match lookup(BACKEND_URL_VAR) {
            Some(value) if !value.trim().is_empty() => Self::parse(value.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn endpoint(&self, path: &str) -> eyre::Result<Url> {
        self.0
            .join(path.trim_start_matches('/'))
            .wrap_err_with(|| format!("Invalid endpoint path: {}", path))
    }
}

impl Default for BackendUrl {
    fn default() -> Self {
        // Pinned by `default_url_constant_parses`.
        Self(
            Url::parse(DEFAULT_BACKEND_URL)
                .expect("DEFAULT_BACKEND_URL is a valid absolute URL"),
        )
    }
}

impl From<Url> for BackendUrl {
    fn from(mut url: Url) -> Self {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        BackendUrl(url)
    }
}

impl std::fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for BackendUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let url = String::deserialize(deserializer)?;
        let url = Url::parse(&url).map_err(serde::de::Error::custom)?;
        Ok(BackendUrl::from(url))
    }
}

impl Serialize for BackendUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}
