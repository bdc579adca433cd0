//! Collection with switchable capabilities

use collate_core::{Collection, Resource};
use std::sync::Arc;

/// Collection whose name and pagination accessors are set individually
#[derive(Debug, Clone, Default)]
pub struct StubCollection {
    resources: Vec<Arc<dyn Resource>>,
    name: Option<String>,
    current_page: Option<u64>,
    total_pages: Option<u64>,
    size: Option<usize>,
}

impl Collection for StubCollection {
    fn resources(&self) -> &[Arc<dyn Resource>] {
        &self.resources
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn current_page(&self) -> Option<u64> {
        self.current_page
    }

    fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    fn size(&self) -> Option<usize> {
        self.size
    }
}

/// Builder for [`StubCollection`]; nothing is offered unless set
pub struct CollectionBuilder {
    inner: StubCollection,
}

impl CollectionBuilder {
    /// Start from a resource sequence
    pub fn new(resources: Vec<Arc<dyn Resource>>) -> Self {
        Self {
            inner: StubCollection {
                resources,
                ..StubCollection::default()
            },
        }
    }

    /// Offer the name capability
    pub fn name(mut self, name: &str) -> Self {
        self.inner.name = Some(name.to_string());
        self
    }

    /// Offer the current page accessor
    pub fn current_page(mut self, page: u64) -> Self {
        self.inner.current_page = Some(page);
        self
    }

    /// Offer the total pages accessor
    pub fn total_pages(mut self, pages: u64) -> Self {
        self.inner.total_pages = Some(pages);
        self
    }

    /// Offer the size accessor, reporting the resource count
    pub fn sized(mut self) -> Self {
        self.inner.size = Some(self.inner.resources.len());
        self
    }

    /// Offer all three pagination accessors
    pub fn paged(self, current_page: u64, total_pages: u64) -> Self {
        self.current_page(current_page)
            .total_pages(total_pages)
            .sized()
    }

    /// Finish as a shared collection
    pub fn build(self) -> Arc<dyn Collection> {
        Arc::new(self.inner)
    }
}
