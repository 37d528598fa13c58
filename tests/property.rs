//! Property-based tests for the session token machinery.

use linkboard::backend::auth::tokens::TokenService;
use linkboard::shared::{is_expired, peek_claims, Claims};
use proptest::prelude::*;

proptest! {
    /// Any username survives an issue/decode round trip intact.
    #[test]
    fn token_round_trip_preserves_the_username(username in "[a-zA-Z0-9_.-]{1,64}") {
        let service = TokenService::new("property-secret", 3600);
        let token = service.issue(&username).unwrap();
        let claims = service.decode(&token).unwrap();
        prop_assert_eq!(claims.username, username);
    }

    /// The unsigned peek at a token agrees with the verified decode.
    #[test]
    fn peeked_claims_match_decoded_claims(username in "[a-zA-Z0-9_.-]{1,64}", ttl in 0u64..10_000_000) {
        let service = TokenService::new("property-secret", ttl);
        let token = service.issue(&username).unwrap();
        prop_assert_eq!(peek_claims(&token).unwrap(), service.decode(&token).unwrap());
    }

    /// Expiry is a strict half-open interval: valid while `now < exp`,
    /// expired from the boundary instant on.
    #[test]
    fn expiry_boundary_is_exact(exp in 0u64..u64::MAX, delta in 0u64..1_000_000) {
        let claims = Claims {
            username: "alice".to_string(),
            exp,
            iat: exp.saturating_sub(3600),
        };
        prop_assert!(is_expired(&claims, exp));
        prop_assert!(is_expired(&claims, exp.saturating_add(delta)));
        if exp > delta {
            prop_assert!(!is_expired(&claims, exp - delta - 1));
        }
    }

    /// Decoding under a different secret never succeeds.
    #[test]
    fn foreign_secrets_never_verify(username in "[a-zA-Z0-9_.-]{1,64}") {
        let token = TokenService::new("secret-a", 3600).issue(&username).unwrap();
        prop_assert!(TokenService::new("secret-b", 3600).decode(&token).is_err());
    }
}
