/**
 * Registration Handler
 *
 * Implements POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Check that email, password, and name are present
 * 2. Validate email format, password strength, and name length
 * 3. Reject duplicate emails (case-insensitive)
 * 4. Hash the password with bcrypt (cost 12)
 * 5. Create the user with an auto-confirmed email timestamp
 * 6. Issue a JWT token and return it with the public user fields
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and never returned
 * - Validation failures short-circuit before any database access
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, AuthUserBody, RegisterRequest};
use crate::auth::users::{create_user, find_by_email};
use crate::auth::validation::{validate_email, validate_name, validate_password};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register handler
///
/// Validates the input, creates the user, and returns a token for
/// immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, bad email, weak password, bad name
/// * `409 Conflict` - email already registered (case-insensitive)
/// * `500 Internal Server Error` - database, hashing, or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (email, password, name) = match (&request.email, &request.password, &request.name) {
        (Some(email), Some(password), Some(name)) => (email, password, name),
        _ => {
            tracing::warn!("Registration with missing fields");
            return Err(ApiError::Validation(
                "Email, password, and name are required".to_string(),
            ));
        }
    };

    if !validate_email(email) {
        tracing::warn!("Invalid email format on registration");
        return Err(ApiError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }

    validate_password(password).map_err(|reason| {
        tracing::warn!("Weak password on registration: {}", reason);
        ApiError::Validation(reason.to_string())
    })?;

    if !validate_name(name) {
        tracing::warn!("Invalid name length on registration");
        return Err(ApiError::Validation(
            "Name must be between 2 and 50 characters".to_string(),
        ));
    }

    if find_by_email(&state.pool, email).await?.is_some() {
        tracing::warn!("Email already registered");
        return Err(ApiError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = hash(password, DEFAULT_COST)?;

    let user = create_user(&state.pool, email, &password_hash, name).await?;

    let token = state
        .tokens
        .issue(user.id, &user.email)
        .map_err(ApiError::internal)?;

    tracing::info!("User registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "User registered successfully".to_string(),
            token,
            user: AuthUserBody {
                id: user.id.to_string(),
                email: user.email,
                name: user.name,
            },
        }),
    ))
}
