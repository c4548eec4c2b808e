/// Inclusive, offset-based row range of one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    pub start: u64,
    pub end: u64,
}

impl WindowRange {
    /// `[cursor * page_size, (cursor + 1) * page_size - 1]`.
    ///
    /// `page_size` must be at least 1.
    pub fn for_cursor(cursor: u32, page_size: u32) -> Self {
        let size = u64::from(page_size.max(1));
        let start = u64::from(cursor) * size;
        Self {
            start,
            end: start + size - 1,
        }
    }

    pub fn offset(&self) -> u64 {
        self.start
    }

    pub fn limit(&self) -> u64 {
        self.end - self.start + 1
    }
}
