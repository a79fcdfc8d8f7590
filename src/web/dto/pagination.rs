//! `page` query parameter for the list pages.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::application::pagination::PageRequest;
use crate::error::AppError;

/// Query string of the paginated list pages.
///
/// The value is kept raw so that `page=last` and non-numeric values reach
/// [`PageRequest::parse`], which decides between a page and a 404.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Converts the raw parameter into a [`PageRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for values that are neither `last` nor integers.
    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        PageRequest::parse(self.page.as_deref())
    }
}
