//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, ChefService};
use crate::infrastructure::persistence::{
    PgChefRepository, PgRecipeRepository, PgSessionRepository,
};

pub type PgChefService = ChefService<PgChefRepository, PgRecipeRepository>;
pub type PgAuthService = AuthService<PgSessionRepository>;

/// Cookie behaviour for the session cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettings {
    pub secure: bool,
}

/// State shared by every request.
///
/// Cloning is cheap: services and the pool sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub chef_service: Arc<PgChefService>,
    pub auth_service: Arc<PgAuthService>,
    pub pool: Arc<PgPool>,
    pub cookies: CookieSettings,
}

impl AppState {
    /// Wires the PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, signing_secret: String, cookies: CookieSettings) -> Self {
        let chef_repo = Arc::new(PgChefRepository::new(pool.clone()));
        let recipe_repo = Arc::new(PgRecipeRepository::new(pool.clone()));
        let session_repo = Arc::new(PgSessionRepository::new(pool.clone()));

        Self {
            chef_service: Arc::new(ChefService::new(chef_repo, recipe_repo)),
            auth_service: Arc::new(AuthService::new(session_repo, signing_secret)),
            pool,
            cookies,
        }
    }
}
