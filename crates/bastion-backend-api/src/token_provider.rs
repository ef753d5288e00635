use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use crate::bearer_token::BearerToken;

/// Read-only view of whatever token the auth client currently holds.
///
/// Implementations are read once per request, right before it is sent.
/// They must not refresh or cache on behalf of the caller.
pub trait TokenProvider {
    fn current_token(&self) -> Option<BearerToken>;
}

impl TokenProvider for BearerToken {
    fn current_token(&self) -> Option<BearerToken> {
        Some(self.clone())
    }
}

impl<T: TokenProvider + ?Sized> TokenProvider for &T {
    fn current_token(&self) -> Option<BearerToken> {
        (**self).current_token()
    }
}

impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    fn current_token(&self) -> Option<BearerToken> {
        (**self).current_token()
    }
}

/// Token slot shared with an auth client that owns refreshing it.
#[derive(Debug, Clone, Default)]
pub struct SharedToken(Arc<RwLock<Option<BearerToken>>>);

impl SharedToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<BearerToken>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl From<Option<BearerToken>> for SharedToken {
    fn from(token: Option<BearerToken>) -> Self {
        SharedToken(Arc::new(RwLock::new(token)))
    }
}

impl TokenProvider for SharedToken {
    fn current_token(&self) -> Option<BearerToken> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub struct FnTokenProvider<F>(F);

impl<F> TokenProvider for FnTokenProvider<F>
where
    F: Fn() -> Option<BearerToken>,
{
    fn current_token(&self) -> Option<BearerToken> {
        (self.0)()
    }
}

pub fn from_fn<F>(f: F) -> FnTokenProvider<F>
where
    F: Fn() -> Option<BearerToken>,
{
    FnTokenProvider(f)
}
