/**
 * Authentication Handler Types
 *
 * Request and response types shared across the authentication handlers.
 *
 * Request fields are `Option<String>` on purpose: a missing field must
 * produce a 400 with the documented message rather than a serde rejection,
 * so presence is checked explicitly in the handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request body.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Login request body.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for register and login: token plus the public user fields.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AuthUserBody,
}

/// Public user fields returned alongside a token.
///
/// Never includes the password hash or account-state timestamps.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthUserBody {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response for the profile endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub success: bool,
    pub message: String,
    pub user: ProfileBody,
}

/// Profile fields, serialized in camelCase to match the public API.
///
/// The `*Verified` flags derive from the confirmation timestamps.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

/// Response carrying only a fresh token (refresh endpoint).
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

/// Bare success/message response (logout endpoint).
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
