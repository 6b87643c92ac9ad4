//! Access token service and credential login.
//!
//! This module provides the `AccessTokenService` for issuing and validating the
//! bearer tokens that gate administrative endpoints, and the `AuthService` that
//! exchanges the configured admin credentials for a token. Tokens are random
//! 32-character alphanumeric strings held in memory with a fixed TTL; expired
//! entries are purged lazily on access.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::error::{auth::AuthError, AppError};

/// Time-to-live for issued access tokens in seconds.
const ACCESS_TOKEN_TTL_SECONDS: u64 = 8 * 60 * 60;

/// Claims carried by an issued access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// Email of the account the token was issued to.
    pub email: String,
    /// Whether the account has administrative privileges.
    pub admin: bool,
}

/// Stored token state with expiration timestamp.
#[derive(Clone)]
struct AccessToken {
    claims: AccessTokenClaims,
    expires_at: Instant,
}

impl AccessToken {
    fn new(claims: AccessTokenClaims) -> Self {
        Self {
            claims,
            expires_at: Instant::now() + Duration::from_secs(ACCESS_TOKEN_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Service for issuing and validating in-memory bearer tokens.
///
/// Tokens are issued by the login endpoint and checked by the auth guard on
/// administrative routes. State lives in memory only: a restart invalidates
/// every outstanding token, which is acceptable for this admin gate.
#[derive(Clone)]
pub struct AccessTokenService {
    tokens: Arc<RwLock<HashMap<String, AccessToken>>>,
}

impl AccessTokenService {
    /// Creates a new service with no outstanding tokens.
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issues a new token carrying the given claims.
    ///
    /// Expired tokens are purged as a side effect so the map does not grow
    /// without bound under repeated logins.
    ///
    /// # Arguments
    /// - `claims` - The claims to associate with the token
    ///
    /// # Returns
    /// - `String` - The 32-character token to hand to the client
    pub async fn issue(&self, claims: AccessTokenClaims) -> String {
        let token = Self::generate_random_token();

        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, stored| !stored.is_expired());
        tokens.insert(token.clone(), AccessToken::new(claims));

        token
    }

    /// Looks up the claims for a token.
    ///
    /// An expired token is removed and treated as unknown.
    ///
    /// # Arguments
    /// - `token` - The bearer token presented by the client
    ///
    /// # Returns
    /// - `Some(AccessTokenClaims)` - The token is known and not expired
    /// - `None` - The token is unknown or has expired
    pub async fn claims(&self, token: &str) -> Option<AccessTokenClaims> {
        let mut tokens = self.tokens.write().await;

        match tokens.get(token) {
            Some(stored) if stored.is_expired() => {
                tokens.remove(token);
                None
            }
            Some(stored) => Some(stored.claims.clone()),
            None => None,
        }
    }

    /// Generates a random alphanumeric token.
    ///
    /// Creates a 32-character string using uppercase letters, lowercase
    /// letters, and digits.
    fn generate_random_token() -> String {
        use rand::Rng;

        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const TOKEN_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Forces a token to expire.
    ///
    /// Used in tests to exercise the expiry path without waiting out the TTL.
    #[cfg(test)]
    pub async fn expire(&self, token: &str) {
        if let Some(stored) = self.tokens.write().await.get_mut(token) {
            stored.expires_at = Instant::now() - Duration::from_secs(1);
        }
    }
}

impl Default for AccessTokenService {
    fn default() -> Self {
        Self::new()
    }
}

/// Credential login against the configured admin account.
pub struct AuthService<'a> {
    admin_email: &'a str,
    admin_password: &'a str,
    tokens: &'a AccessTokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(
        admin_email: &'a str,
        admin_password: &'a str,
        tokens: &'a AccessTokenService,
    ) -> Self {
        Self {
            admin_email,
            admin_password,
            tokens,
        }
    }

    /// Exchanges admin credentials for a bearer token.
    ///
    /// # Arguments
    /// - `email` - Submitted email
    /// - `password` - Submitted password
    ///
    /// # Returns
    /// - `Ok(String)` - Credentials matched; a fresh admin token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Credentials did not match
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        if email != self.admin_email || password != self.admin_password {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self
            .tokens
            .issue(AccessTokenClaims {
                email: email.to_string(),
                admin: true,
            })
            .await;

        Ok(token)
    }
}
