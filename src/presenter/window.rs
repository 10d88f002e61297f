//! Windowed list: a fixed-size page over an in-memory ordered collection

/// Page-at-a-time view over a collection.
///
/// `current_index` is the offset of the first visible element and is always a
/// multiple of `per_page`. Replacing the collection resets it to 0.
#[derive(Debug, Clone)]
pub struct WindowedList<T> {
    items: Vec<T>,
    per_page: usize,
    current_index: usize,
}

impl<T> WindowedList<T> {
    /// A `per_page` of 0 is treated as 1.
    pub fn new(items: Vec<T>, per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
            current_index: 0,
        }
    }

    pub fn empty(per_page: usize) -> Self {
        Self::new(Vec::new(), per_page)
    }

    /// Swap in a freshly fetched collection and go back to the first page
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_index = 0;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Elements of the current page, clipped to the collection bounds
    pub fn current_page(&self) -> &[T] {
        let start = self.current_index.min(self.items.len());
        let end = start.saturating_add(self.per_page).min(self.items.len());
        &self.items[start..end]
    }

    /// 0-based page number
    pub fn current_page_number(&self) -> usize {
        self.current_index / self.per_page
    }

    /// `max(1, ceil(len / per_page))`
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.current_index + self.per_page < self.items.len()
    }

    pub fn has_prev(&self) -> bool {
        self.current_index > 0
    }

    pub fn advance(&mut self) {
        if self.has_next() {
            self.current_index += self.per_page;
        }
    }

    pub fn retreat(&mut self) {
        if self.has_prev() {
            self.current_index = self.current_index.saturating_sub(self.per_page);
        }
    }

    /// Jump to page `page` (0-based). Out-of-range pages are ignored; returns
    /// whether the jump happened.
    pub fn jump_to_page(&mut self, page: usize) -> bool {
        if page >= self.total_pages() {
            return false;
        }
        self.current_index = page * self.per_page;
        true
    }

    /// Number of empty slots needed to render the current page at full height
    pub fn padding_slots(&self) -> usize {
        self.per_page - self.current_page().len()
    }

    /// All pages in order
    pub fn pages(&self) -> std::slice::Chunks<'_, T> {
        self.items.chunks(self.per_page)
    }
}

impl<T> Default for WindowedList<T> {
    fn default() -> Self {
        Self::empty(1)
    }
}
