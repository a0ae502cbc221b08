/**
 * Authentication Middleware
 *
 * The request gate for protected routes. It extracts the bearer token from
 * the `Authorization` header, verifies it, and attaches the decoded
 * identity to the request extensions.
 *
 * The gate is purely cryptographic: it never consults the datastore.
 * Account-state checks (soft-delete, ban) happen in the handlers.
 *
 * # Rejections
 *
 * - Missing or malformed header → 401 "Access token is required"
 * - Expired token → 401 "Token has expired"
 * - Invalid signature/format (or non-UUID subject) → 403 "Invalid token"
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::TokenError;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity decoded from a verified bearer token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Extract the bearer token from an `Authorization` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Authentication middleware for protected routes.
///
/// On success the decoded `AuthenticatedUser` is inserted into the request
/// extensions for handlers to pick up via the `CurrentUser` extractor.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::MissingToken
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        match e {
            TokenError::Expired => ApiError::TokenExpired,
            TokenError::Invalid => ApiError::TokenInvalid,
        }
    })?;

    // A token whose subject is not a UUID was not issued by us.
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("Non-UUID subject in token");
        ApiError::TokenInvalid
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user.
///
/// Reads the identity the middleware attached to the request extensions;
/// rejects with 401 when the route was not gated.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingToken
            })?;

        Ok(CurrentUser(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Extension, Router};
    use pretty_assertions::assert_eq;
    use tower::util::ServiceExt;

    fn protected_app(state: AppState) -> Router {
        async fn whoami(Extension(identity): Extension<AuthenticatedUser>) -> String {
            identity.email
        }

        Router::new()
            .route("/protected", get(whoami))
            .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .with_state(state)
    }

    fn get_request(auth: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/protected");
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));

        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_missing_token_rejected_401() {
        let app = protected_app(AppState::for_tests());
        let response = app.oneshot(get_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_passes_identity_through() {
        let state = AppState::for_tests();
        let user_id = Uuid::new_v4();
        let token = state.tokens.issue(user_id, "gate@example.com").unwrap();

        let app = protected_app(state);
        let response = app
            .oneshot(get_request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_expired_token_rejected_401() {
        let state = AppState::for_tests();
        let expired = state
            .tokens
            .clone()
            .with_ttl(-3600)
            .issue(Uuid::new_v4(), "gate@example.com")
            .unwrap();

        let app = protected_app(state);
        let response = app
            .oneshot(get_request(Some(&format!("Bearer {expired}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_tampered_token_rejected_403() {
        let state = AppState::for_tests();
        let token = state
            .tokens
            .issue(Uuid::new_v4(), "gate@example.com")
            .unwrap();
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let app = protected_app(state);
        let response = app
            .oneshot(get_request(Some(&format!("Bearer {tampered}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_current_user_extractor_missing_identity() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap()
            .into_parts();

        let result = <CurrentUser as axum::extract::FromRequestParts<AppState>>::from_request_parts(
            &mut parts,
            &AppState::for_tests(),
        )
        .await;

        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
