// src/policy.rs

//! Authorization and registration rules, kept free of I/O.

use validator::Validate;

use crate::{
    error::{AppError, FieldError},
    models::{blog::Blog, user::CreateUserRequest},
    utils::jwt::Claims,
};

/// Field order in which registration errors are reported.
const REGISTRATION_FIELDS: [&str; 2] = ["username", "password"];

/// Only the owner recorded on the blog may mutate it.
/// Blogs without an owner can't be mutated through the API at all.
pub fn authorize_blog_mutation(claims: &Claims, blog: &Blog) -> Result<(), AppError> {
    let user_id = claims.user_id()?;

    match blog.owner_id() {
        Some(owner_id) if owner_id == user_id => Ok(()),
        _ => {
            tracing::warn!(
                "User {} denied mutation of blog {} (owner: {:?})",
                user_id,
                blog.id,
                blog.owner_id()
            );
            Err(AppError::AuthError(
                "only the creator of a blog can modify it".to_string(),
            ))
        }
    }
}

/// Checks a registration candidate before its password is hashed.
///
/// `username_taken` is the caller's lookup of the candidate username.
pub fn validate_registration(
    candidate: &CreateUserRequest,
    username_taken: bool,
) -> Result<(), FieldError> {
    if let Err(errors) = candidate.validate() {
        let field_errors = errors.field_errors();
        for field in REGISTRATION_FIELDS {
            if let Some(errs) = field_errors.get(field) {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                return Err(FieldError::new(field, message));
            }
        }
    }

    if username_taken {
        return Err(FieldError::new("username", "username must be unique"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blog::Owner;

    fn claims_for(id: i64) -> Claims {
        Claims {
            sub: id.to_string(),
            username: "root".to_string(),
            exp: usize::MAX,
        }
    }

    fn blog_owned_by(owner: Option<i64>) -> Blog {
        Blog {
            id: 7,
            title: "Title".to_string(),
            author: None,
            url: "example.com".to_string(),
            likes: 0,
            user: owner.map(|id| Owner {
                id,
                username: "root".to_string(),
                name: String::new(),
            }),
        }
    }

    fn candidate(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            name: "Erkko Mäkinen".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn owner_may_mutate() {
        assert!(authorize_blog_mutation(&claims_for(1), &blog_owned_by(Some(1))).is_ok());
    }

    #[test]
    fn other_user_may_not_mutate() {
        assert!(matches!(
            authorize_blog_mutation(&claims_for(2), &blog_owned_by(Some(1))),
            Err(AppError::AuthError(_))
        ));
    }

    #[test]
    fn ownerless_blog_is_not_mutable() {
        assert!(matches!(
            authorize_blog_mutation(&claims_for(1), &blog_owned_by(None)),
            Err(AppError::AuthError(_))
        ));
    }

    #[test]
    fn valid_registration_passes() {
        assert_eq!(validate_registration(&candidate("erlimaki", "salasana"), false), Ok(()));
    }

    #[test]
    fn short_username_names_the_field() {
        let err = validate_registration(&candidate("er", "salasana"), false).unwrap_err();
        assert_eq!(err.field, "username");
        assert!(err.message.to_lowercase().contains("username"));
    }

    #[test]
    fn short_password_names_the_field() {
        let err = validate_registration(&candidate("erlimaki", "sa"), false).unwrap_err();
        assert_eq!(err.field, "password");
        assert!(err.message.to_lowercase().contains("password"));
    }

    #[test]
    fn username_is_reported_before_password() {
        let err = validate_registration(&candidate("er", "sa"), false).unwrap_err();
        assert_eq!(err.field, "username");
    }

    #[test]
    fn taken_username_is_rejected() {
        let err = validate_registration(&candidate("root", "salasana"), true).unwrap_err();
        assert_eq!(err.field, "username");
        assert!(err.message.contains("unique"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_registration(&candidate("äöå", "salasana"), false).is_ok());
    }
}
