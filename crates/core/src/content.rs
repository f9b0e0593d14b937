use crate::error::{Error, Result};
use crate::types::BlogPost;
use std::collections::HashSet;

const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "welcome",
        title: "Welcome to the Campaign",
        content: "We're excited to launch this campaign. Our goal is to make a real difference.\n\n\
                  Every contribution, large or small, brings us closer to that goal.",
        date: "2025-11-02",
    },
    BlogPost {
        slug: "how-to-contribute",
        title: "How to Contribute",
        content: "There are many ways to support our cause:\n\n\
                  - **Donate** through the form on the home page\n\
                  - **Volunteer** your time at an upcoming event\n\
                  - **Share** our message with friends and family",
        date: "2025-11-01",
    },
];

/// All blog posts, in display order
pub fn blog_posts() -> &'static [BlogPost] {
    POSTS
}

/// Whether a slug only uses lowercase ASCII letters, digits and hyphens
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Check posts can be published: slugs URL-safe and unique, dates ISO formatted
pub fn validate_posts(posts: &[BlogPost]) -> Result<()> {
    let mut seen = HashSet::new();

    for post in posts {
        if !is_url_safe_slug(post.slug) {
            return Err(Error::InvalidContent(format!(
                "Slug '{}' must only contain lowercase letters, digits and hyphens",
                post.slug
            )));
        }

        if !seen.insert(post.slug) {
            return Err(Error::InvalidContent(format!(
                "Duplicate slug '{}'",
                post.slug
            )));
        }

        if post.published_on().is_none() {
            return Err(Error::InvalidContent(format!(
                "Post '{}' has invalid date '{}', expected YYYY-MM-DD",
                post.slug, post.date
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &'static str, date: &'static str) -> BlogPost {
        BlogPost {
            slug,
            title: "Title",
            content: "Body",
            date,
        }
    }

    #[test]
    fn test_builtin_posts_are_valid() {
        assert_eq!(blog_posts().len(), 2);
        validate_posts(blog_posts()).unwrap();
    }

    #[test]
    fn test_is_url_safe_slug() {
        assert!(is_url_safe_slug("welcome"));
        assert!(is_url_safe_slug("how-to-contribute"));
        assert!(is_url_safe_slug("year-2025"));
        assert!(!is_url_safe_slug(""));
        assert!(!is_url_safe_slug("Welcome"));
        assert!(!is_url_safe_slug("hello world"));
        assert!(!is_url_safe_slug("../etc/passwd"));
        assert!(!is_url_safe_slug("-leading"));
        assert!(!is_url_safe_slug("trailing-"));
    }

    #[test]
    fn test_validate_posts_rejects_duplicate_slug() {
        let posts = [post("welcome", "2025-11-02"), post("welcome", "2025-11-03")];
        let err = validate_posts(&posts).unwrap_err();
        assert!(err.to_string().contains("Duplicate slug 'welcome'"));
    }

    #[test]
    fn test_validate_posts_rejects_unsafe_slug() {
        let err = validate_posts(&[post("a/b", "2025-11-02")]).unwrap_err();
        assert!(err.to_string().contains("'a/b'"));
    }

    #[test]
    fn test_validate_posts_rejects_bad_date() {
        let err = validate_posts(&[post("welcome", "2025-13-40")]).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_validate_posts_empty_is_ok() {
        validate_posts(&[]).unwrap();
    }
}
