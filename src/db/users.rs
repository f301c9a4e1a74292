// src/db/users.rs

use sqlx::SqlitePool;

use crate::models::user::User;

const SELECT_USER: &str = "SELECT id, username, name, password_hash, created_at FROM users";

pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Inserts a user; the caller hashes the password first.
/// A duplicate username surfaces as a unique-violation database error.
pub async fn insert(
    pool: &SqlitePool,
    username: &str,
    name: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, name, password_hash)
        VALUES (?, ?, ?)
        RETURNING id, username, name, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(name)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}
