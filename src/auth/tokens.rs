/**
 * JWT Token Issuance and Verification
 *
 * This module owns the compact signed claim set used for stateless
 * authentication. The signing secret is injected at construction time by
 * server startup; nothing here reads the environment.
 *
 * # Claims
 *
 * Tokens carry the user id (`sub`), email, fixed issuer and audience
 * strings, and issue/expiry timestamps. Expiry is 7 days from issuance.
 *
 * # Verification
 *
 * Verification is purely cryptographic: signature, expiry, issuer, and
 * audience. No revocation list is consulted; account-state checks happen
 * in the handlers, not here.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Fixed issuer string embedded in every token.
pub const TOKEN_ISSUER: &str = "storefront-api";

/// Fixed audience string embedded in every token.
pub const TOKEN_AUDIENCE: &str = "storefront-users";

/// Token lifetime: 7 days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Verification failure classification.
///
/// `Expired` means the signature checked out but the expiry has passed;
/// everything else (bad signature, malformed token, wrong issuer or
/// audience) collapses into `Invalid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Signs and verifies authentication tokens.
///
/// Constructed once at startup from the configured secret and shared via
/// application state.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Create an issuer from the shared signing secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs: TOKEN_TTL_SECS,
        }
    }

    /// Override the token lifetime. Negative values produce already-expired
    /// tokens, which the tests use to exercise the expiry path.
    pub fn with_ttl(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Issue a signed token for a user.
    pub fn issue(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret")
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issuer().issue(user_id, "test@example.com").unwrap();
        assert!(!token.is_empty());

        let claims = issuer().verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.aud, TOKEN_AUDIENCE);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token() {
        // TTL well past the default verification leeway.
        let token = issuer()
            .with_ttl(-3600)
            .issue(Uuid::new_v4(), "test@example.com")
            .unwrap();

        assert_eq!(issuer().verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_signature() {
        let token = issuer().issue(Uuid::new_v4(), "test@example.com").unwrap();

        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(issuer().verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_secret() {
        let token = issuer().issue(Uuid::new_v4(), "test@example.com").unwrap();
        let other = TokenIssuer::new("another-secret");
        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        // Hand-encode a token with the right secret but a foreign issuer.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            iss: "someone-else".to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(issuer().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_token() {
        assert_eq!(issuer().verify("invalid.token.here"), Err(TokenError::Invalid));
        assert_eq!(issuer().verify(""), Err(TokenError::Invalid));
    }
}
