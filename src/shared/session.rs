//! Session token claims and the expiry check.
//!
//! A session token is a signed bundle of `{username, exp, iat}`. Its
//! validity is a pure function of the signature and the current time; it is
//! bearer data, not a stored entity. Signing and signature verification are
//! server-side concerns (`backend::auth::tokens`); this module holds only
//! what both sides need: the claims shape, the clock, and the expiry rule.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Claims carried in a session token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated user
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Current Unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Whether a set of claims has expired at `now`.
///
/// Used identically by the server middleware and the client cache. Expiry is
/// deliberately separate from signature verification: a token whose signature
/// checks out can still be expired, and the two conditions are reported
/// differently in tests and logs.
pub fn is_expired(claims: &Claims, now: u64) -> bool {
    claims.exp <= now
}

/// Decode the payload segment of a token without verifying the signature.
///
/// The client does not hold the signing secret, so this is how it inspects
/// its own stored token to derive "current user" and "logged in" without a
/// server round trip. Never use this on the server as an authentication
/// check; the middleware verifies the signature first.
pub fn peek_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: u64) -> Claims {
        Claims {
            username: "alice".to_string(),
            exp,
            iat: 0,
        }
    }

    #[test]
    fn not_expired_before_exp() {
        assert!(!is_expired(&claims(100), 99));
    }

    #[test]
    fn expired_at_exact_exp() {
        // exp <= now counts as expired
        assert!(is_expired(&claims(100), 100));
        assert!(is_expired(&claims(100), 101));
    }

    #[test]
    fn peek_claims_reads_payload() {
        let payload = serde_json::to_vec(&claims(42)).unwrap();
        let token = format!(
            "header.{}.signature",
            URL_SAFE_NO_PAD.encode(&payload)
        );
        let peeked = peek_claims(&token).unwrap();
        assert_eq!(peeked.username, "alice");
        assert_eq!(peeked.exp, 42);
    }

    #[test]
    fn peek_claims_rejects_garbage() {
        assert!(peek_claims("not a token").is_none());
        assert!(peek_claims("a.!!!.c").is_none());
        assert!(peek_claims("").is_none());
    }
}
