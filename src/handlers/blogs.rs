// src/handlers/blogs.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    db::{
        self,
        blogs::{BlogChanges, NewBlog},
    },
    error::AppError,
    models::blog::{CreateBlogRequest, UpdateBlogRequest},
    policy::authorize_blog_mutation,
    stats,
    utils::{json::AppJson, jwt::Claims},
};

/// Blog ids are opaque to clients; anything unparseable simply names no blog.
fn parse_id(id: &str) -> Result<i64, AppError> {
    id.parse::<i64>().map_err(|_| blog_not_found())
}

fn blog_not_found() -> AppError {
    AppError::NotFound("blog not found".to_string())
}

/// List every blog with its owner resolved. Public.
pub async fn list_blogs(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let blogs = db::blogs::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list blogs: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(blogs))
}

/// Get a single blog by ID.
pub async fn get_blog(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let blog = db::blogs::find(&pool, id)
        .await?
        .ok_or_else(blog_not_found)?;

    Ok(Json(blog))
}

/// Create a blog owned by the caller.
/// Requires: Login. `likes` defaults to 0.
pub async fn create_blog(
    State(pool): State<SqlitePool>,
    claims: Claims,
    AppJson(payload): AppJson<CreateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let (Some(title), Some(url)) = (payload.title.as_deref(), payload.url.as_deref()) else {
        return Err(AppError::BadRequest("title and url are required".to_string()));
    };

    let user = db::users::find_by_id(&pool, claims.user_id()?)
        .await?
        .ok_or_else(|| AppError::AuthError("user no longer exists".to_string()))?;

    let blog = db::blogs::insert(
        &pool,
        NewBlog {
            title,
            author: payload.author.as_deref(),
            url,
            likes: payload.likes.unwrap_or(0),
            user_id: Some(user.id),
        },
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to create blog: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("User {} created blog {}", user.username, blog.id);

    Ok(Json(blog))
}

/// Update the fields present in the body.
///
/// Not ownership-gated: any caller, authenticated or not, may edit any blog.
/// Create and delete do check ownership.
pub async fn update_blog(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let changes = BlogChanges {
        title: payload.title.as_deref(),
        author: payload.author.as_deref(),
        url: payload.url.as_deref(),
        likes: payload.likes,
    };

    let blog = db::blogs::update(&pool, id, changes)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update blog {}: {:?}", id, e);
            AppError::from(e)
        })?
        .ok_or_else(blog_not_found)?;

    Ok(Json(blog))
}

/// Delete a blog.
/// Requires: Login + ownership.
pub async fn delete_blog(
    State(pool): State<SqlitePool>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let blog = db::blogs::find(&pool, id)
        .await?
        .ok_or_else(blog_not_found)?;

    authorize_blog_mutation(&claims, &blog)?;

    if !db::blogs::delete(&pool, id).await? {
        return Err(blog_not_found());
    }

    tracing::info!("User {} deleted blog {}", claims.username, id);

    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate statistics over every stored blog. Public.
pub async fn blog_stats(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let blogs = db::blogs::list(&pool).await?;

    Ok(Json(json!({
        "totalLikes": stats::total_likes(&blogs),
        "favoriteBlog": or_empty(stats::favorite_blog(&blogs)),
        "mostBlogs": or_empty(stats::most_blogs(&blogs)),
        "mostLikes": or_empty(stats::most_likes(&blogs)),
    })))
}

/// "No data" renders as `{}` rather than `null`.
fn or_empty<T: Serialize>(value: Option<T>) -> Value {
    match value {
        Some(value) => json!(value),
        None => json!({}),
    }
}
