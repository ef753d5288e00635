use http::StatusCode;

/// The backend answered with a status outside 200..=299.
///
/// The message is fixed so callers matching on it keep working. The status
/// is kept as a field so callers can read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFailed {
    pub status: StatusCode,
}

impl RequestFailed {
    pub const MESSAGE: &'static str = "Failed to fetch protected data";
}

impl std::fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for RequestFailed {}
