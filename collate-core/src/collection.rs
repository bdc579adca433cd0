//! Resource collections and their optional capabilities
//!
//! A collection is an ordered sequence of resources. Beyond the sequence
//! itself a collection may offer a name (a named scope such as "all
//! comments") and pagination accessors. Each capability is an explicit
//! method returning `None` when the collection does not offer it, so
//! probing a capability never fails.

use crate::resource::Resource;
use std::fmt::Debug;
use std::sync::Arc;

/// An ordered sequence of resources with optional capabilities
pub trait Collection: Debug + Send + Sync {
    /// Resources in insertion order
    fn resources(&self) -> &[Arc<dyn Resource>];

    /// Whether the collection holds no resources
    fn is_empty(&self) -> bool {
        self.resources().is_empty()
    }

    /// Name of the collection, if it is a named collection
    fn name(&self) -> Option<&str> {
        None
    }

    /// Current page accessor, if the collection is paged
    fn current_page(&self) -> Option<u64> {
        None
    }

    /// Total pages accessor, if the collection is paged
    fn total_pages(&self) -> Option<u64> {
        None
    }

    /// Size accessor; every sequence offers one unless it opts out
    fn size(&self) -> Option<usize> {
        Some(self.resources().len())
    }
}

impl Collection for Vec<Arc<dyn Resource>> {
    fn resources(&self) -> &[Arc<dyn Resource>] {
        self
    }
}

/// Plain, unnamed list of resources
#[derive(Debug, Clone, Default)]
pub struct ResourceList {
    resources: Vec<Arc<dyn Resource>>,
}

impl ResourceList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource
    pub fn push(&mut self, resource: Arc<dyn Resource>) {
        self.resources.push(resource);
    }

    /// Builder-style append
    pub fn with(mut self, resource: Arc<dyn Resource>) -> Self {
        self.push(resource);
        self
    }
}

impl From<Vec<Arc<dyn Resource>>> for ResourceList {
    fn from(resources: Vec<Arc<dyn Resource>>) -> Self {
        Self { resources }
    }
}

impl FromIterator<Arc<dyn Resource>> for ResourceList {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Resource>>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().collect(),
        }
    }
}

impl Collection for ResourceList {
    fn resources(&self) -> &[Arc<dyn Resource>] {
        &self.resources
    }
}

/// Named collection, e.g. a query scope over one model (`"Comment"`)
#[derive(Debug, Clone)]
pub struct NamedCollection {
    name: Option<String>,
    resources: Vec<Arc<dyn Resource>>,
}

impl NamedCollection {
    /// Create a named collection
    pub fn new(name: impl Into<String>, resources: Vec<Arc<dyn Resource>>) -> Self {
        Self {
            name: Some(name.into()),
            resources,
        }
    }

    /// A collection offering the name capability whose name is unset
    pub fn unnamed(resources: Vec<Arc<dyn Resource>>) -> Self {
        Self {
            name: None,
            resources,
        }
    }
}

impl Collection for NamedCollection {
    fn resources(&self) -> &[Arc<dyn Resource>] {
        &self.resources
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// One page of a larger paginated result set
#[derive(Debug, Clone)]
pub struct Page {
    resources: Vec<Arc<dyn Resource>>,
    current_page: u64,
    total_pages: u64,
    name: Option<String>,
}

impl Page {
    /// Create a page
    pub fn new(resources: Vec<Arc<dyn Resource>>, current_page: u64, total_pages: u64) -> Self {
        Self {
            resources,
            current_page,
            total_pages,
            name: None,
        }
    }

    /// Attach the name of the underlying scope
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Collection for Page {
    fn resources(&self) -> &[Arc<dyn Resource>] {
        &self.resources
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn current_page(&self) -> Option<u64> {
        Some(self.current_page)
    }

    fn total_pages(&self) -> Option<u64> {
        Some(self.total_pages)
    }
}
