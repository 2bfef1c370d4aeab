//! Offset/limit window for list queries.

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Offset/limit window. `limit = None` returns every remaining row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
    pub limit: Option<i64>,
    pub offset: i64,
}

impl Page {
    /// Build a page from raw query values, clamping the limit to
    /// `1..=MAX_PAGE_SIZE` and the offset to non-negative.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.map(|l| l.clamp(1, MAX_PAGE_SIZE)),
            offset: offset.unwrap_or(0).max(0),
        }
    }

    /// Apply this window to an in-memory sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skipped = items.into_iter().skip(self.offset as usize);
        match self.limit {
            Some(limit) => skipped.take(limit as usize).collect(),
            None => skipped.collect(),
        }
    }
}
