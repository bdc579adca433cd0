//! Per-item serializers and their constructors

use crate::inflection::{EnglishInflector, Inflector};
use crate::options::Options;
use crate::resource::Resource;
use std::fmt::Debug;
use std::sync::Arc;

/// Serialization adapter built for a single resource
pub trait ItemSerializer: Debug + Send + Sync {
    /// Key under which this item is nested, if one can be determined
    fn json_key(&self) -> Option<String>;

    /// The wrapped resource
    fn object(&self) -> &Arc<dyn Resource>;

    /// Options the serializer was built with
    fn options(&self) -> &Options;
}

/// Constructor capability for item serializers.
///
/// One class is shared by every item it serializes; `type_key` is a
/// class-level property available without building an instance.
pub trait SerializerClass: Debug + Send + Sync {
    /// Name of the serializer class, used in logs and registry listings
    fn name(&self) -> &str;

    /// Class-level type key, if the class declares one
    fn type_key(&self) -> Option<&str> {
        None
    }

    /// Build a serializer for `resource`
    fn build(&self, resource: Arc<dyn Resource>, options: Options) -> Box<dyn ItemSerializer>;
}

/// Serializer class producing [`BasicSerializer`] instances
#[derive(Debug, Clone)]
pub struct BasicSerializerClass {
    name: String,
    type_key: Option<String>,
}

impl BasicSerializerClass {
    /// Create a class without a declared type key
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_key: None,
        }
    }

    /// Declare the class-level type key
    pub fn with_type(mut self, type_key: impl Into<String>) -> Self {
        self.type_key = Some(type_key.into());
        self
    }
}

impl SerializerClass for BasicSerializerClass {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_key(&self) -> Option<&str> {
        self.type_key.as_deref()
    }

    fn build(&self, resource: Arc<dyn Resource>, options: Options) -> Box<dyn ItemSerializer> {
        Box::new(BasicSerializer {
            type_key: self.type_key.clone(),
            object: resource,
            options,
        })
    }
}

/// Default item serializer.
///
/// Its key is the `root` option, else the class type key, else the
/// underscored model name of the resource.
#[derive(Debug)]
pub struct BasicSerializer {
    type_key: Option<String>,
    object: Arc<dyn Resource>,
    options: Options,
}

impl ItemSerializer for BasicSerializer {
    fn json_key(&self) -> Option<String> {
        self.options
            .root
            .clone()
            .or_else(|| self.type_key.clone())
            .or_else(|| {
                self.object
                    .model_name()
                    .map(|name| EnglishInflector.underscore(name))
            })
    }

    fn object(&self) -> &Arc<dyn Resource> {
        &self.object
    }

    fn options(&self) -> &Options {
        &self.options
    }
}
