//! Session token issuance and verification.
//!
//! Tokens are JWTs signed with HS256 over a secret injected at
//! construction; there is no ambient global secret and no server-side
//! session table. `decode` verifies the signature only — expiry is a
//! separate, explicit step (`shared::session::is_expired`) so that the
//! middleware and the client cache share one definition of "expired".

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::shared::session::{unix_now, Claims};

/// Failures while issuing or decoding a token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature does not match header+payload under the service secret
    #[error("token signature is invalid")]
    InvalidSignature,
    /// Token structure does not parse as header.payload.signature
    #[error("token is malformed")]
    Malformed,
    /// Signing failed (never expected with an HS256 secret)
    #[error("token signing failed")]
    Signing,
}

/// Issues and decodes signed, self-contained session tokens.
///
/// Pure computation: no I/O, no suspension, no per-token server state.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenService {
    /// Build a service around a process-wide secret, fixed for the process
    /// lifetime, and the token time-to-live in seconds.
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a token for `username` expiring `ttl_secs` from now.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let now = unix_now();
        let claims = Claims {
            username: username.to_string(),
            exp: now + self.ttl_secs,
            iat: now,
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!("token signing failed: {e:?}");
            TokenError::Signing
        })
    }

    /// Verify the signature and return the claims.
    ///
    /// Does **not** check expiry; callers run `is_expired` themselves so
    /// server and client agree on the semantics.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::InvalidSignature => Err(TokenError::InvalidSignature),
                _ => Err(TokenError::Malformed),
            },
        }
    }
}
