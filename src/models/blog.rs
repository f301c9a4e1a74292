// src/models/blog.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row of the `blogs` table joined with its (optional) owner.
#[derive(Debug, Clone, FromRow)]
pub struct BlogRow {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user_id: Option<i64>,
    pub user_username: Option<String>,
    pub user_name: Option<String>,
}

/// The external representation of a blog.
/// The owner back-reference is resolved to a lightweight summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,

    /// `None` for seeded blogs created before ownership existed.
    pub user: Option<Owner>,
}

/// Public identity fields of the user who created a blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    pub username: String,
    pub name: String,
}

impl Blog {
    pub fn owner_id(&self) -> Option<i64> {
        self.user.as_ref().map(|owner| owner.id)
    }
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        let user = match (row.user_id, row.user_username) {
            (Some(id), Some(username)) => Some(Owner {
                id,
                username,
                name: row.user_name.unwrap_or_default(),
            }),
            _ => None,
        };

        Blog {
            id: row.id,
            title: row.title,
            author: row.author,
            url: row.url,
            likes: row.likes,
            user,
        }
    }
}

/// Blog fields listed under a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BlogSummary {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
}

/// DTO for creating a new blog.
/// `title` and `url` are optional at the wire level so their absence becomes a 400, not a 422.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(
        required(message = "url is required"),
        length(min = 1, message = "url must not be empty")
    )]
    pub url: Option<String>,

    /// Defaults to 0 when absent.
    #[validate(range(min = 0, message = "likes must be a non-negative integer"))]
    pub likes: Option<i64>,
}

/// DTO for updating a blog. Absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must be a non-negative integer"))]
    pub likes: Option<i64>,
}
