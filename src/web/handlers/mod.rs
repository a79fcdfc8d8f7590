//! HTML page handlers.

mod dashboard;
mod liked_by;
mod login;
mod profile;
mod recipes;

pub use dashboard::{DashboardTemplate, dashboard_handler};
pub use liked_by::{WhoLikedTemplate, liked_by_handler};
pub use login::{LoginTemplate, login_page_handler, login_submit_handler, logout_handler};
pub use profile::{ChefTemplate, profile_handler};
pub use recipes::{
    ChefFavoritesTemplate, ChefRecipesTemplate, authored_recipes_handler,
    favorite_recipes_handler,
};
