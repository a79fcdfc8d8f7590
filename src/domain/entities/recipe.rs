//! Recipe entity and the liked-by projection.

use chrono::{DateTime, Utc};

use super::Chef;

/// A recipe authored by exactly one chef.
///
/// `author_username` is joined in by the repository so list pages can link to
/// the author's profile without a second lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub title: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new Recipe instance.
    pub fn new(
        id: i64,
        author_id: i64,
        author_username: String,
        title: String,
        summary: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            author_username,
            title,
            summary,
            created_at,
        }
    }
}

/// An authored recipe together with every chef who liked it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeLikes {
    pub recipe: Recipe,
    pub likers: Vec<Chef>,
}

impl RecipeLikes {
    pub fn like_count(&self) -> usize {
        self.likers.len()
    }

    pub fn is_liked(&self) -> bool {
        !self.likers.is_empty()
    }
}
