//! Authentication flow integration tests
//!
//! Exercises the register, login, and profile endpoints against a live
//! database: duplicate registration, indistinguishable login failures,
//! and soft-deleted account handling.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{get_with_token, post_json, TestDatabase};

const PASSWORD: &str = "Sup3rSecret";

fn unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}

#[tokio::test]
async fn test_duplicate_registration_conflicts_case_insensitively() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("database unavailable; skipping");
        return;
    };
    let email = unique_email();

    let (status, body) = post_json(
        db.app(),
        "/auth/register",
        json!({ "email": email, "password": PASSWORD, "name": "First User" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));

    // Same address with different casing must hit the same account.
    let (status, body) = post_json(
        db.app(),
        "/auth/register",
        json!({ "email": email.to_uppercase(), "password": PASSWORD, "name": "Second User" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], json!("User with this email already exists"));

    db.remove_user(&email).await;
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("database unavailable; skipping");
        return;
    };
    let email = unique_email();

    let (status, _) = post_json(
        db.app(),
        "/auth/register",
        json!({ "email": email, "password": PASSWORD, "name": "Login Target" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (wrong_status, wrong_body) = post_json(
        db.app(),
        "/auth/login",
        json!({ "email": email, "password": "Wr0ngPassword" }),
    )
    .await;
    let (unknown_status, unknown_body) = post_json(
        db.app(),
        "/auth/login",
        json!({ "email": unique_email(), "password": PASSWORD }),
    )
    .await;

    // Wrong password and unknown email produce the same status and body,
    // so a caller cannot probe which addresses are registered.
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["message"], json!("Invalid email or password"));

    db.remove_user(&email).await;
}

#[tokio::test]
async fn test_profile_of_deactivated_account_rejected() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("database unavailable; skipping");
        return;
    };
    let email = unique_email();

    let (status, body) = post_json(
        db.app(),
        "/auth/register",
        json!({ "email": email, "password": PASSWORD, "name": "Soon Deleted" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = body["token"].as_str().expect("token in response").to_string();

    // Profile is reachable while the account is live.
    let (status, _) = get_with_token(db.app(), "/auth/profile", &token).await;
    assert_eq!(status, StatusCode::OK);

    sqlx::query("UPDATE users SET deleted_at = NOW() WHERE email = $1")
        .bind(&email)
        .execute(&db.pool)
        .await
        .expect("Failed to soft-delete test user");

    // The still-valid token no longer grants access to the profile.
    let (status, body) = get_with_token(db.app(), "/auth/profile", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Account has been deactivated"));

    db.remove_user(&email).await;
}
