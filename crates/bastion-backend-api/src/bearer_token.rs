use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Sent in place of a token when the auth client has none.
    pub const UNDEFINED: &'static str = "undefined";
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken(len={})", self.0.len())
    }
}

impl From<String> for BearerToken {
    fn from(value: String) -> Self {
        BearerToken(value)
    }
}

impl From<&str> for BearerToken {
    fn from(value: &str) -> Self {
        BearerToken(value.to_string())
    }
}
