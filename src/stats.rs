// src/stats.rs

//! Read-only statistics over a snapshot of blogs.
//!
//! All functions are total. "No data" is `None` rather than an error.
//! Whenever several candidates tie for the maximum, the one encountered first
//! in the input order wins (for author groups: the author whose first blog
//! appears earliest).

use std::collections::HashMap;

use serde::Serialize;

use crate::models::blog::Blog;

/// The author with the most blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: Option<String>,
    pub blogs: u64,
}

/// The author whose blogs collected the most likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: i64,
}

pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| blog.likes).fold(0, i64::saturating_add)
}

pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(current) if current.likes >= blog.likes => Some(current),
        _ => Some(blog),
    })
}

pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    let groups = group_by_author(blogs, |_| 1u64, u64::saturating_add);
    let (author, count) = best_group(groups)?;
    Some(AuthorBlogs {
        author: author.map(str::to_owned),
        blogs: count,
    })
}

pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let groups = group_by_author(blogs, |blog| blog.likes, i64::saturating_add);
    let (author, likes) = best_group(groups)?;
    Some(AuthorLikes {
        author: author.map(str::to_owned),
        likes,
    })
}

/// Sums `value` per author, keeping groups in first-seen order.
/// Authors are compared verbatim; no case or whitespace folding.
/// `add` must not overflow; callers pass saturating addition.
fn group_by_author<T, F>(
    blogs: &[Blog],
    value: F,
    add: fn(T, T) -> T,
) -> Vec<(Option<&str>, T)>
where
    T: Copy,
    F: Fn(&Blog) -> T,
{
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<(Option<&str>, T)> = Vec::new();

    for blog in blogs {
        let key = blog.author.as_deref();
        match index.get(&key) {
            Some(&i) => groups[i].1 = add(groups[i].1, value(blog)),
            None => {
                index.insert(key, groups.len());
                groups.push((key, value(blog)));
            }
        }
    }

    groups
}

fn best_group<K, T: PartialOrd>(groups: Vec<(K, T)>) -> Option<(K, T)> {
    groups.into_iter().fold(None, |best, group| match best {
        Some(current) if current.1 >= group.1 => Some(current),
        _ => Some(group),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(id: i64, author: &str, likes: i64) -> Blog {
        Blog {
            id,
            title: format!("Blog {id}"),
            author: Some(author.to_string()),
            url: format!("https://example.com/{id}"),
            likes,
            user: None,
        }
    }

    fn sample() -> Vec<Blog> {
        vec![
            blog(1, "Michael Chan", 7),
            blog(2, "Edsger W. Dijkstra", 5),
            blog(3, "Edsger W. Dijkstra", 12),
            blog(4, "Robert C. Martin", 10),
            blog(5, "Robert C. Martin", 0),
            blog(6, "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_likes_sums_all_blogs() {
        assert_eq!(total_likes(&[blog(1, "a", 10), blog(2, "b", 10)]), 20);
        assert_eq!(total_likes(&sample()), 36);
    }

    #[test]
    fn total_likes_saturates_instead_of_overflowing() {
        let blogs = vec![blog(1, "a", i64::MAX), blog(2, "b", i64::MAX)];
        assert_eq!(total_likes(&blogs), i64::MAX);
    }

    #[test]
    fn favorite_blog_of_empty_list_is_none() {
        assert_eq!(favorite_blog(&[]), None);
    }

    #[test]
    fn favorite_blog_of_single_blog_is_that_blog() {
        let blogs = vec![blog(1, "a", 3)];
        assert_eq!(favorite_blog(&blogs), Some(&blogs[0]));
    }

    #[test]
    fn favorite_blog_has_most_likes() {
        let blogs = sample();
        assert_eq!(favorite_blog(&blogs).map(|b| b.id), Some(3));
    }

    #[test]
    fn favorite_blog_tie_goes_to_first() {
        let blogs = vec![blog(1, "a", 10), blog(2, "b", 10), blog(3, "c", 4)];
        assert_eq!(favorite_blog(&blogs).map(|b| b.id), Some(1));
    }

    #[test]
    fn most_blogs_of_empty_list_is_none() {
        assert_eq!(most_blogs(&[]), None);
    }

    #[test]
    fn most_blogs_counts_per_author() {
        assert_eq!(
            most_blogs(&sample()),
            Some(AuthorBlogs {
                author: Some("Robert C. Martin".to_string()),
                blogs: 3,
            })
        );
    }

    #[test]
    fn most_blogs_tie_goes_to_first_seen_author() {
        let blogs = vec![blog(1, "b", 1), blog(2, "a", 1), blog(3, "a", 1), blog(4, "b", 1)];
        assert_eq!(most_blogs(&blogs).unwrap().author.as_deref(), Some("b"));
    }

    #[test]
    fn most_blogs_does_not_normalize_author() {
        let blogs = vec![blog(1, "Ada", 1), blog(2, "ada", 1), blog(3, "ada ", 1)];
        let best = most_blogs(&blogs).unwrap();
        assert_eq!(best.author.as_deref(), Some("Ada"));
        assert_eq!(best.blogs, 1);
    }

    #[test]
    fn blogs_without_author_form_their_own_group() {
        let mut anonymous = blog(1, "", 1);
        anonymous.author = None;
        let blogs = vec![anonymous.clone(), anonymous, blog(3, "a", 1)];
        assert_eq!(
            most_blogs(&blogs),
            Some(AuthorBlogs {
                author: None,
                blogs: 2,
            })
        );
    }

    #[test]
    fn most_likes_of_empty_list_is_none() {
        assert_eq!(most_likes(&[]), None);
    }

    #[test]
    fn most_likes_sums_per_author() {
        assert_eq!(
            most_likes(&sample()),
            Some(AuthorLikes {
                author: Some("Edsger W. Dijkstra".to_string()),
                likes: 17,
            })
        );
    }

    #[test]
    fn most_likes_saturates_per_author() {
        let blogs = vec![
            blog(1, "big", i64::MAX),
            blog(2, "big", i64::MAX),
            blog(3, "small", 1),
        ];
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: Some("big".to_string()),
                likes: i64::MAX,
            })
        );
    }

    #[test]
    fn most_likes_tie_goes_to_first_seen_author() {
        let blogs = vec![blog(1, "x", 5), blog(2, "y", 10), blog(3, "x", 5)];
        assert_eq!(most_likes(&blogs).unwrap().author.as_deref(), Some("x"));
    }
}
