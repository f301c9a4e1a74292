// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    db,
    error::AppError,
    models::user::{LoginRequest, LoginResponse},
    utils::{hash::verify_password, json::AppJson, jwt::sign_jwt},
};

/// Authenticates a user and returns a JWT token.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = authenticate(&pool, &config, &payload.username, &payload.password).await?;
    Ok(Json(response))
}

/// Verifies a username/password pair and issues a session token.
///
/// An unknown username and a wrong password are indistinguishable to the caller.
pub async fn authenticate(
    pool: &SqlitePool,
    config: &Config,
    username: &str,
    password: &str,
) -> Result<LoginResponse, AppError> {
    let user = db::users::find_by_username(pool, username)
        .await
        .map_err(|e| {
            tracing::error!("Login DB error: {:?}", e);
            AppError::from(e)
        })?;

    let user = match user {
        Some(user) if verify_password(password, &user.password_hash)? => user,
        _ => return Err(AppError::AuthError("invalid username or password".to_string())),
    };

    let token = sign_jwt(
        user.id,
        &user.username,
        &config.jwt_secret,
        config.jwt_expiration,
    )?;

    tracing::debug!("Issued token for {}", user.username);

    Ok(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    })
}
