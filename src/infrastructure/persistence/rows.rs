//! Row types decoded from query results and their domain conversions.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Chef, Recipe, Session};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ChefRow {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl From<ChefRow> for Chef {
    fn from(r: ChefRow) -> Self {
        Chef::new(r.id, r.username, r.display_name, r.joined_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct RecipeRow {
    pub id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub title: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(r: RecipeRow) -> Self {
        Recipe::new(
            r.id,
            r.author_id,
            r.author_username,
            r.title,
            r.summary,
            r.created_at,
        )
    }
}

/// A liker joined with the recipe they liked.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LikerRow {
    pub recipe_id: i64,
    #[sqlx(flatten)]
    pub chef: ChefRow,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SessionRow {
    pub id: i64,
    pub chef_id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl From<SessionRow> for Session {
    fn from(r: SessionRow) -> Self {
        Session {
            id: r.id,
            chef_id: r.chef_id,
            name: r.name,
            token_hash: r.token_hash,
            created_at: r.created_at,
            last_used_at: r.last_used_at,
            revoked_at: r.revoked_at,
        }
    }
}
