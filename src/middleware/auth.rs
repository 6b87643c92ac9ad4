use axum::http::{header, HeaderMap};

use crate::{
    error::{auth::AuthError, AppError},
    service::auth::{AccessTokenClaims, AccessTokenService},
};

pub enum Permission {
    Admin,
}

/// Guards a handler behind a bearer access token.
///
/// Reads the `Authorization` header, resolves the token against the in-memory
/// token service, and checks the resolved claims against the required
/// permissions. Handlers call `require` at the top of the function body and
/// propagate the error, which maps to 401 or 403.
pub struct AuthGuard<'a> {
    tokens: &'a AccessTokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a AccessTokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<AccessTokenClaims, AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(claims) = self.tokens.claims(token).await else {
            return Err(AuthError::InvalidToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.admin {
                        return Err(AuthError::AccessDenied(
                            claims.email,
                            "Account attempted an administrative operation without the required admin permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(claims)
    }

    fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
    }
}
