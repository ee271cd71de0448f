/// Position in a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhPageCursor {
    /// First page.
    First,
    /// Absolute URL taken from a `rel="next"` link.
    Next(String),
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhPage<T> {
    /// Page items.
    pub items: Vec<T>,
    /// Cursor of the following page, if any.
    pub next: Option<GhPageCursor>,
}

impl<T> GhPage<T> {
    /// Last page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Page followed by another one.
    pub fn with_next<U: Into<String>>(items: Vec<T>, next_url: U) -> Self {
        Self {
            items,
            next: Some(GhPageCursor::Next(next_url.into())),
        }
    }
}
