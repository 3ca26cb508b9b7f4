//! Typed inputs shared by list and history endpoints.

use chrono::NaiveDateTime;

/// Date format the history endpoints expect.
pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Page size and page number of a list request.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::rest::Pagination;
///
/// let page = Pagination::default();
/// assert_eq!((page.limit, page.page), (20, 1));
///
/// let page = Pagination::new(100, 3);
/// assert_eq!(page.limit, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Records per page. The API accepts 20, 50 or 100.
    pub limit: u32,
    /// One-based page number.
    pub page: u32,
}

impl Pagination {
    /// Creates a pagination setting.
    #[must_use]
    pub const fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }

    /// Returns the same page size for page `page`.
    #[must_use]
    pub const fn page(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(20, 1)
    }
}

/// Window and paging of an `orders/history` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRange {
    /// Only changes at or after this moment.
    pub start_date: Option<NaiveDateTime>,
    /// Only changes at or before this moment.
    pub end_date: Option<NaiveDateTime>,
    /// Records per request.
    pub limit: u32,
    /// Records to skip.
    pub offset: u32,
    /// Leave out changes made through this API key.
    pub skip_my_changes: bool,
}

impl HistoryRange {
    /// Sets the start of the window.
    #[must_use]
    pub const fn since(mut self, start: NaiveDateTime) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Sets the end of the window.
    #[must_use]
    pub const fn until(mut self, end: NaiveDateTime) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Sets limit and offset.
    #[must_use]
    pub const fn window(mut self, limit: u32, offset: u32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Sets whether changes made through this API key are left out.
    #[must_use]
    pub const fn skip_my_changes(mut self, skip: bool) -> Self {
        self.skip_my_changes = skip;
        self
    }

    /// Returns the request parameters in the order the API documents them.
    ///
    /// Unset dates are omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format(HISTORY_DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format(HISTORY_DATE_FORMAT).to_string()));
        }
        pairs.push(("limit", self.limit.to_string()));
        pairs.push(("offset", self.offset.to_string()));
        pairs.push(("skipMyChanges", self.skip_my_changes.to_string()));
        pairs
    }
}

impl Default for HistoryRange {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            limit: 100,
            offset: 0,
            skip_my_changes: true,
        }
    }
}
