//! Request-token (CSRF-equivalent) verifier contract.
//!
//! Consumed by the boundary layer before any core call; the core itself never
//! checks tokens.

/// Scope string the host issues bookmark request tokens under.
pub const BOOKMARK_TOKEN_SCOPE: &str = "bookmark_nonce";

/// Verifies a request-correlation token issued by the host.
pub trait RequestTokenVerifier {
    fn verify(&self, token: &str, scope: &str) -> bool;
}

impl<T: RequestTokenVerifier + ?Sized> RequestTokenVerifier for &T {
    fn verify(&self, token: &str, scope: &str) -> bool {
        (**self).verify(token, scope)
    }
}
