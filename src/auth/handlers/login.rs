/**
 * Login Handler
 *
 * Implements POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Check that email and password are present and the email is well-formed
 * 2. Look up the user by case-folded email
 * 3. Reject soft-deleted and currently banned accounts
 * 4. Verify the password with bcrypt
 * 5. Record the sign-in time and issue a JWT token
 *
 * # Security
 *
 * - A missing user and a wrong password produce the identical 401 response
 *   so the endpoint cannot be used to enumerate registered emails
 * - Password verification uses bcrypt's constant-time comparison
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use chrono::Utc;

use crate::auth::handlers::types::{AuthResponse, AuthUserBody, LoginRequest};
use crate::auth::users::{find_by_email, record_sign_in};
use crate::auth::validation::validate_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the credentials and returns a JWT token with the public user
/// fields.
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or malformed email
/// * `401 Unauthorized` - unknown user, wrong password, or deactivated
///   account (unknown user and wrong password share one message)
/// * `403 Forbidden` - account temporarily suspended
/// * `500 Internal Server Error` - database, hashing, or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = match (&request.email, &request.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            tracing::warn!("Login with missing fields");
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }
    };

    if !validate_email(email) {
        tracing::warn!("Invalid email format on login");
        return Err(ApiError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }

    // Unknown user and missing hash fall into the same generic rejection.
    let user = find_by_email(&state.pool, email)
        .await?
        .filter(|user| !user.password_hash.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Login attempt for unknown user");
            ApiError::InvalidCredentials
        })?;

    if user.is_deleted() {
        tracing::warn!("Login attempt for deactivated account: {}", user.id);
        return Err(ApiError::AccountDeactivated);
    }

    if user.is_banned(Utc::now()) {
        tracing::warn!("Login attempt for suspended account: {}", user.id);
        return Err(ApiError::AccountSuspended);
    }

    let valid = verify(password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Wrong password for user: {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    record_sign_in(&state.pool, user.id).await?;

    let token = state
        .tokens
        .issue(user.id, &user.email)
        .map_err(ApiError::internal)?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: AuthUserBody {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
        },
    }))
}
