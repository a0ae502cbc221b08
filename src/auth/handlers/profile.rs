/**
 * Profile Handler
 *
 * Implements GET /auth/profile. The route is gated by the auth middleware,
 * so the handler receives an already-verified identity via the `CurrentUser`
 * extractor and only has to fetch and shape the stored record.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{ProfileBody, ProfileResponse};
use crate::auth::users::find_by_id;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// Profile handler
///
/// Returns the profile fields for the authenticated user. Verification
/// flags are derived from the confirmation timestamps.
///
/// # Errors
///
/// * `401 Unauthorized` - no authenticated identity, or account deactivated
/// * `404 Not Found` - token subject no longer exists
/// * `500 Internal Server Error` - database failure
pub async fn profile(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = find_by_id(&state.pool, identity.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Profile requested for missing user: {}", identity.user_id);
            ApiError::NotFound("User not found".to_string())
        })?;

    // A structurally valid token does not outlive the account.
    if user.is_deleted() {
        tracing::warn!("Profile requested for deactivated account: {}", user.id);
        return Err(ApiError::AccountDeactivated);
    }

    Ok(Json(ProfileResponse {
        success: true,
        message: "Profile retrieved successfully".to_string(),
        user: ProfileBody {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            email_verified: user.email_verified(),
            phone_verified: user.phone_verified(),
            created_at: user.created_at,
            last_sign_in_at: user.last_sign_in_at,
        },
    }))
}
