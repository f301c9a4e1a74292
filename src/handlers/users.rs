// src/handlers/users.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    db,
    error::{AppError, FieldError},
    models::user::{CreateUserRequest, UserResponse},
    policy::validate_registration,
    utils::{hash::hash_password, json::AppJson},
};

/// Registers a new user.
///
/// Validation runs on the plaintext password; only its Argon2 hash is stored.
/// The response never contains the hash.
pub async fn register(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username_taken = db::users::username_exists(&pool, &payload.username).await?;
    validate_registration(&payload, username_taken)?;

    let password_hash = hash_password(&payload.password)?;

    let user = db::users::insert(&pool, &payload.username, &payload.name, &password_hash)
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration of the same name.
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::from(FieldError::new("username", "username must be unique"))
            }
            e => {
                tracing::error!("Failed to register user: {:?}", e);
                AppError::from(e)
            }
        })?;

    tracing::info!("Registered user {} (id {})", user.username, user.id);

    Ok(Json(UserResponse::new(user, Vec::new())))
}

/// Lists all users with the blogs they own.
pub async fn list_users(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let users = db::users::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list users: {:?}", e);
        AppError::from(e)
    })?;
    let mut blogs = db::blogs::summaries_by_owner(&pool).await?;

    let users: Vec<UserResponse> = users
        .into_iter()
        .map(|user| {
            let owned = blogs.remove(&user.id).unwrap_or_default();
            UserResponse::new(user, owned)
        })
        .collect();

    Ok(Json(users))
}
