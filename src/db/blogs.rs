// src/db/blogs.rs

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::blog::{Blog, BlogRow, BlogSummary};

const SELECT_BLOG: &str = r#"
    SELECT
        b.id, b.title, b.author, b.url, b.likes, b.user_id,
        u.username AS user_username,
        u.name AS user_name
    FROM blogs b
    LEFT JOIN users u ON u.id = b.user_id
"#;

/// Fields of a blog about to be inserted.
#[derive(Debug)]
pub struct NewBlog<'a> {
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub url: &'a str,
    pub likes: i64,
    pub user_id: Option<i64>,
}

/// Replacement values for an update; `None` keeps the stored value.
#[derive(Debug)]
pub struct BlogChanges<'a> {
    pub title: Option<&'a str>,
    pub author: Option<&'a str>,
    pub url: Option<&'a str>,
    pub likes: Option<i64>,
}

/// Every blog in insertion order, owners resolved.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Blog>, sqlx::Error> {
    let rows = sqlx::query_as::<_, BlogRow>(&format!("{SELECT_BLOG} ORDER BY b.id"))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Blog::from).collect())
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Blog>, sqlx::Error> {
    let row = sqlx::query_as::<_, BlogRow>(&format!("{SELECT_BLOG} WHERE b.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Blog::from))
}

pub async fn insert(pool: &SqlitePool, blog: NewBlog<'_>) -> Result<Blog, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO blogs (title, author, url, likes, user_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(blog.title)
    .bind(blog.author)
    .bind(blog.url)
    .bind(blog.likes)
    .bind(blog.user_id)
    .fetch_one(pool)
    .await?;

    find(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Returns `None` when no blog has this id.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: BlogChanges<'_>,
) -> Result<Option<Blog>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE blogs SET
            title = COALESCE(?, title),
            author = COALESCE(?, author),
            url = COALESCE(?, url),
            likes = COALESCE(?, likes)
        WHERE id = ?
        "#,
    )
    .bind(changes.title)
    .bind(changes.author)
    .bind(changes.url)
    .bind(changes.likes)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    find(pool, id).await
}

/// Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Owned blogs grouped by owner id.
pub async fn summaries_by_owner(
    pool: &SqlitePool,
) -> Result<HashMap<i64, Vec<BlogSummary>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (i64, i64, String, Option<String>, String)>(
        r#"
        SELECT user_id, id, title, author, url
        FROM blogs
        WHERE user_id IS NOT NULL
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut by_owner: HashMap<i64, Vec<BlogSummary>> = HashMap::new();
    for (user_id, id, title, author, url) in rows {
        by_owner.entry(user_id).or_default().push(BlogSummary {
            id,
            title,
            author,
            url,
        });
    }

    Ok(by_owner)
}
