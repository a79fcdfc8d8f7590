//! Query-string and form DTOs for page handlers.

pub mod login;
pub mod pagination;

pub use login::{LoginForm, LoginQuery};
pub use pagination::PageQuery;
