//! Serializer lookup capability

use crate::item::SerializerClass;
use crate::resource::Resource;
use std::sync::Arc;

/// Resolves the serializer class for a resource.
///
/// Returning `None` means no serializer is known for the resource; the
/// caller decides whether that is an error.
pub trait SerializerLookup: Send + Sync {
    /// Resolve a serializer class for `resource`
    fn serializer_for(&self, resource: &dyn Resource) -> Option<Arc<dyn SerializerClass>>;
}

impl<F> SerializerLookup for F
where
    F: Fn(&dyn Resource) -> Option<Arc<dyn SerializerClass>> + Send + Sync,
{
    fn serializer_for(&self, resource: &dyn Resource) -> Option<Arc<dyn SerializerClass>> {
        self(resource)
    }
}
