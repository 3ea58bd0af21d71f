//! Static shared-secret token check.

/// Literal token the controller accepts.
pub const DEFAULT_SHARED_SECRET: &str = "abcd";

/// Shared secret gating `/ws-controller`.
///
/// NOT a security-grade authentication mechanism: the comparison is a
/// plain string equality (not constant-time) and the secret is never
/// rotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Wraps the given secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns `true` if `token` equals the secret exactly.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.0 == token
    }
}

impl Default for SharedSecret {
    fn default() -> Self {
        Self::new(DEFAULT_SHARED_SECRET)
    }
}
