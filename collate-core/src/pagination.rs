//! Pagination metadata for paged collections

use crate::collection::Collection;

/// Snapshot of the pagination accessors of a paged collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    /// 1-based index of this page
    pub current_page: u64,
    /// Number of pages in the full result set
    pub total_pages: u64,
    /// Number of resources on this page
    pub size: usize,
}

impl PaginationMeta {
    /// Read the metadata from a collection.
    ///
    /// Returns `None` unless the collection offers all three accessors.
    pub fn from_collection(collection: &dyn Collection) -> Option<Self> {
        Some(Self {
            current_page: collection.current_page()?,
            total_pages: collection.total_pages()?,
            size: collection.size()?,
        })
    }

    /// Whether a collection offers every pagination accessor.
    ///
    /// A pure capability probe: accessor values are not inspected.
    pub fn is_offered_by(collection: &dyn Collection) -> bool {
        collection.current_page().is_some()
            && collection.total_pages().is_some()
            && collection.size().is_some()
    }

    /// Whether this is the first page
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether this is the last page
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Previous page number, if any
    pub fn prev_page(&self) -> Option<u64> {
        if self.is_first_page() {
            None
        } else {
            Some(self.current_page - 1)
        }
    }

    /// Next page number, if any
    pub fn next_page(&self) -> Option<u64> {
        if self.is_last_page() {
            None
        } else {
            Some(self.current_page + 1)
        }
    }
}
