//! Page-number pagination for list pages.
//!
//! Semantics match a classic server-rendered list view:
//!
//! - a missing or empty `page` parameter means page 1
//! - `page=last` selects the last page
//! - anything that is not an integer, or falls outside `1..=num_pages`, is a 404
//! - an empty collection still has one (empty) page

use serde_json::json;

use crate::error::AppError;

/// Page selection parsed from the `page` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(i64),
    Last,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::Number(1)
    }
}

impl PageRequest {
    /// Parses the raw `page` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the value is neither `last` nor an integer.
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };

        if raw == "last" {
            return Ok(PageRequest::Last);
        }

        raw.parse::<i64>().map(PageRequest::Number).map_err(|_| {
            AppError::not_found(
                "Page is not 'last', nor can it be converted to an int",
                json!({ "page": raw }),
            )
        })
    }
}

/// Splits a counted collection into fixed-size pages.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    per_page: i64,
}

impl Paginator {
    pub const fn new(per_page: i64) -> Self {
        Self { per_page }
    }

    /// Number of pages for `count` items; never less than one.
    pub fn num_pages(&self, count: i64) -> i64 {
        if count <= 0 {
            1
        } else {
            (count + self.per_page - 1) / self.per_page
        }
    }

    /// Resolves a request against the collection size.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page number is below 1 or past the last page.
    pub fn window(&self, request: PageRequest, count: i64) -> Result<PageWindow, AppError> {
        let num_pages = self.num_pages(count);

        let number = match request {
            PageRequest::Last => num_pages,
            PageRequest::Number(n) if n < 1 => {
                return Err(AppError::not_found(
                    "That page number is less than 1",
                    json!({ "page": n }),
                ));
            }
            PageRequest::Number(n) if n > num_pages => {
                return Err(AppError::not_found(
                    "That page contains no results",
                    json!({ "page": n, "num_pages": num_pages }),
                ));
            }
            PageRequest::Number(n) => n,
        };

        Ok(PageWindow {
            number,
            num_pages,
            total_items: count.max(0),
            per_page: self.per_page,
        })
    }
}

/// A validated page position, ready to be turned into `OFFSET`/`LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: i64,
    pub num_pages: i64,
    pub total_items: i64,
    pub per_page: i64,
}

impl PageWindow {
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Attaches the fetched rows to this window.
    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            number: self.number,
            num_pages: self.num_pages,
            total_items: self.total_items,
            per_page: self.per_page,
        }
    }
}

/// One page of results plus navigation metadata for templates.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub num_pages: i64,
    pub total_items: i64,
    pub per_page: i64,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_page_number(&self) -> i64 {
        self.number + 1
    }

    pub fn previous_page_number(&self) -> i64 {
        self.number - 1
    }

    /// 1-based index of the first item on this page, 0 when the page is empty.
    pub fn start_index(&self) -> i64 {
        if self.total_items == 0 {
            0
        } else {
            (self.number - 1) * self.per_page + 1
        }
    }

    /// 1-based index of the last item on this page, 0 when the page is empty.
    pub fn end_index(&self) -> i64 {
        if self.total_items == 0 {
            0
        } else {
            (self.number * self.per_page).min(self.total_items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: Paginator = Paginator::new(5);

    #[test]
    fn test_parse_defaults_to_first_page() {
        assert_eq!(PageRequest::parse(None).unwrap(), PageRequest::Number(1));
        assert_eq!(PageRequest::parse(Some("")).unwrap(), PageRequest::Number(1));
        assert_eq!(PageRequest::parse(Some("  ")).unwrap(), PageRequest::Number(1));
    }

    #[test]
    fn test_parse_number_and_last() {
        assert_eq!(PageRequest::parse(Some("3")).unwrap(), PageRequest::Number(3));
        assert_eq!(PageRequest::parse(Some("last")).unwrap(), PageRequest::Last);
    }

    #[test]
    fn test_parse_garbage_is_not_found() {
        for raw in ["abc", "2.0", "LAST", "1e3"] {
            let err = PageRequest::parse(Some(raw)).unwrap_err();
            assert!(matches!(err, AppError::NotFound { .. }), "page={raw}");
        }
    }

    #[test]
    fn test_num_pages() {
        assert_eq!(FIVE.num_pages(0), 1);
        assert_eq!(FIVE.num_pages(1), 1);
        assert_eq!(FIVE.num_pages(5), 1);
        assert_eq!(FIVE.num_pages(6), 2);
        assert_eq!(FIVE.num_pages(7), 2);
        assert_eq!(FIVE.num_pages(11), 3);
    }

    #[test]
    fn test_window_offsets() {
        let first = FIVE.window(PageRequest::Number(1), 7).unwrap();
        assert_eq!((first.offset(), first.limit()), (0, 5));

        let second = FIVE.window(PageRequest::Number(2), 7).unwrap();
        assert_eq!((second.offset(), second.limit()), (5, 5));
    }

    #[test]
    fn test_window_last() {
        let last = FIVE.window(PageRequest::Last, 11).unwrap();
        assert_eq!(last.number, 3);
        assert_eq!(last.offset(), 10);
    }

    #[test]
    fn test_window_out_of_range() {
        assert!(matches!(
            FIVE.window(PageRequest::Number(0), 7).unwrap_err(),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            FIVE.window(PageRequest::Number(-2), 7).unwrap_err(),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            FIVE.window(PageRequest::Number(3), 7).unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[test]
    fn test_empty_collection_has_first_page() {
        let window = FIVE.window(PageRequest::Number(1), 0).unwrap();
        let page = window.into_page::<i64>(vec![]);
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert!(!page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);

        assert!(FIVE.window(PageRequest::Number(2), 0).is_err());
    }

    #[test]
    fn test_page_navigation() {
        let page = FIVE
            .window(PageRequest::Number(2), 12)
            .unwrap()
            .into_page(vec![6, 7, 8, 9, 10]);

        assert!(page.has_next());
        assert!(page.has_previous());
        assert!(page.has_other_pages());
        assert_eq!(page.next_page_number(), 3);
        assert_eq!(page.previous_page_number(), 1);
        assert_eq!(page.start_index(), 6);
        assert_eq!(page.end_index(), 10);

        let last = FIVE
            .window(PageRequest::Last, 12)
            .unwrap()
            .into_page(vec![11, 12]);
        assert!(!last.has_next());
        assert_eq!(last.start_index(), 11);
        assert_eq!(last.end_index(), 12);
    }
}
