//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Chef`] - A user, as seen on public pages
//! - [`Recipe`] - A recipe authored by a chef
//! - [`RecipeLikes`] - An authored recipe with the chefs who liked it
//! - [`Session`] - A login session identified by a hashed token
//!
//! Creation inputs use separate `New*` structs (e.g. [`NewChef`]).

pub mod chef;
pub mod recipe;
pub mod session;

pub use chef::{Chef, NewChef};
pub use recipe::{Recipe, RecipeLikes};
pub use session::Session;
