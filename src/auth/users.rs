/**
 * User Model and Database Operations
 *
 * This module owns the `users` table. It is a thin pass-through to the
 * database; the only rule it enforces is email case-folding, so the unique
 * constraint on `email` behaves case-insensitively.
 *
 * # Account State
 *
 * Two optional timestamps drive account state:
 * - `deleted_at` - a soft-deleted user still exists as a row but is treated
 *   as nonexistent for authentication
 * - `banned_until` - a ban-expiry in the future temporarily bars login
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User record as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Email address, stored lowercased
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Optional display name
    pub name: Option<String>,
    /// Optional phone number
    pub phone: Option<String>,
    /// Set when the email address was confirmed
    pub email_confirmed_at: Option<DateTime<Utc>>,
    /// Set when the phone number was confirmed
    pub phone_confirmed_at: Option<DateTime<Utc>>,
    /// Last successful login
    pub last_sign_in_at: Option<DateTime<Utc>>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
    /// Temporary ban expiry
    pub banned_until: Option<DateTime<Utc>>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A soft-deleted user is treated as nonexistent for authentication.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// A user is banned while the ban expiry lies strictly in the future.
    pub fn is_banned(&self, now: DateTime<Utc>) -> bool {
        matches!(self.banned_until, Some(until) if until > now)
    }

    /// Email confirmation state, derived from the confirmation timestamp.
    pub fn email_verified(&self) -> bool {
        self.email_confirmed_at.is_some()
    }

    /// Phone confirmation state, derived from the confirmation timestamp.
    pub fn phone_verified(&self) -> bool {
        self.phone_confirmed_at.is_some()
    }
}

/// Lowercase an email for storage and lookup.
///
/// Applied on every write and every email lookup so uniqueness is
/// case-insensitive regardless of input casing.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Create a new user.
///
/// Assigns a fresh v4 UUID, stores the email lowercased, and auto-confirms
/// the email address (registration implies a verified email in this
/// deployment).
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    name: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, name, email_confirmed_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, email, password_hash, name, phone, email_confirmed_at, phone_confirmed_at, last_sign_in_at, deleted_at, banned_until, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(normalize_email(email))
    .bind(password_hash)
    .bind(name.trim())
    .bind(now)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email (case-folded exact match).
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, phone, email_confirmed_at, phone_confirmed_at, last_sign_in_at, deleted_at, banned_until, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, phone, email_confirmed_at, phone_confirmed_at, last_sign_in_at, deleted_at, banned_until, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Record a successful login by updating the sign-in and update timestamps.
pub async fn record_sign_in(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        UPDATE users
        SET last_sign_in_at = $1, updated_at = $1
        WHERE id = $2
        "#,
    )
    .bind(now)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            name: Some("Test".to_string()),
            phone: None,
            email_confirmed_at: Some(now),
            phone_confirmed_at: None,
            last_sign_in_at: None,
            deleted_at: None,
            banned_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("A@B.com"), "a@b.com");
        assert_eq!(normalize_email("  User@Example.COM  "), "user@example.com");
    }

    #[test]
    fn test_is_deleted() {
        let mut user = sample_user();
        assert!(!user.is_deleted());
        user.deleted_at = Some(Utc::now());
        assert!(user.is_deleted());
    }

    #[test]
    fn test_is_banned_only_while_expiry_in_future() {
        let now = Utc::now();
        let mut user = sample_user();
        assert!(!user.is_banned(now));

        user.banned_until = Some(now + Duration::hours(1));
        assert!(user.is_banned(now));

        // An elapsed ban no longer bars the user.
        user.banned_until = Some(now - Duration::hours(1));
        assert!(!user.is_banned(now));
    }

    #[test]
    fn test_verified_flags_derive_from_timestamps() {
        let mut user = sample_user();
        assert!(user.email_verified());
        assert!(!user.phone_verified());

        user.phone_confirmed_at = Some(Utc::now());
        assert!(user.phone_verified());
    }
}
