//! Small helpers shared by the web layer and the admin CLI.
//!
//! - [`token`] - Session token generation
//! - [`username`] - Username validation
//! - [`redirect`] - Login redirect targets

pub mod redirect;
pub mod token;
pub mod username;
