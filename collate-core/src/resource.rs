//! Domain resources handed to the serializers

use std::any::Any;
use std::fmt::Debug;

/// A domain object to be serialized.
///
/// Resources are opaque to the collection layer. The only contract used is
/// the optional model-name capability and a human-readable description for
/// error reporting.
pub trait Resource: Debug + Send + Sync + 'static {
    /// Upcast for type-based serializer resolution
    fn as_any(&self) -> &dyn Any;

    /// Model name of the resource, if it exposes one (e.g. `"BlogPost"`)
    fn model_name(&self) -> Option<&str> {
        None
    }

    /// Description used when reporting a resource in errors
    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl dyn Resource {
    /// Downcast to a concrete resource type
    pub fn downcast_ref<R: Resource>(&self) -> Option<&R> {
        self.as_any().downcast_ref::<R>()
    }

    /// Check whether this resource is of concrete type `R`
    pub fn is<R: Resource>(&self) -> bool {
        self.as_any().is::<R>()
    }
}
