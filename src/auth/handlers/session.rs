/**
 * Session Handlers: Logout and Refresh
 *
 * Implements POST /auth/logout and POST /auth/refresh. Both routes are
 * gated by the auth middleware.
 *
 * # Stateless Logout
 *
 * Tokens are stateless and there is no server-side revocation store, so
 * logout cannot invalidate anything; it exists so clients have a uniform
 * endpoint to call while discarding their stored token. A denylist or
 * per-user valid-since timestamp would be required for true server-side
 * logout.
 */

use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::auth::handlers::types::{MessageResponse, TokenResponse};
use crate::auth::users::find_by_id;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// Logout handler
///
/// Always responds 200. The client is expected to discard its token.
pub async fn logout(CurrentUser(identity): CurrentUser) -> Json<MessageResponse> {
    tracing::info!("User logged out: {}", identity.user_id);

    Json(MessageResponse {
        success: true,
        message: "Logout successful".to_string(),
    })
}

/// Refresh handler
///
/// Issues a fresh 7-day token for the holder of a still-valid token,
/// provided the account still exists, is not soft-deleted, and is not
/// currently banned.
///
/// # Errors
///
/// * `401 Unauthorized` - account vanished, deactivated, or suspended
/// * `500 Internal Server Error` - database or signing failure
pub async fn refresh(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = find_by_id(&state.pool, identity.user_id).await?;

    let user = match user {
        Some(user) if !user.is_deleted() && !user.is_banned(Utc::now()) => user,
        _ => {
            tracing::warn!("Refresh rejected for inactive account: {}", identity.user_id);
            return Err(ApiError::InactiveAccount);
        }
    };

    let token = state
        .tokens
        .issue(user.id, &user.email)
        .map_err(ApiError::internal)?;

    tracing::info!("Token refreshed for user: {}", user.id);

    Ok(Json(TokenResponse {
        success: true,
        message: "Token refreshed successfully".to_string(),
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::AuthenticatedUser;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_logout_always_succeeds() {
        let identity = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
        };
        let Json(response) = logout(CurrentUser(identity)).await;
        assert!(response.success);
        assert_eq!(response.message, "Logout successful");
    }
}
