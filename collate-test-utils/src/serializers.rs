//! Instrumented serializer classes

use collate_core::{
    BasicSerializerClass, ItemSerializer, Options, Resource, SerializerClass,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Serializer class whose items report a fixed `json_key`
#[derive(Debug, Clone)]
pub struct FixedKeySerializerClass {
    key: Option<String>,
    type_key: Option<String>,
}

impl FixedKeySerializerClass {
    /// Items report `key`, which may be `None` or empty
    pub fn new(key: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
            type_key: None,
        }
    }

    /// Declare the class-level type key
    pub fn with_type(mut self, type_key: Option<&str>) -> Self {
        self.type_key = type_key.map(str::to_string);
        self
    }
}

#[derive(Debug)]
struct FixedKeySerializer {
    key: Option<String>,
    object: Arc<dyn Resource>,
    options: Options,
}

impl ItemSerializer for FixedKeySerializer {
    fn json_key(&self) -> Option<String> {
        self.key.clone()
    }

    fn object(&self) -> &Arc<dyn Resource> {
        &self.object
    }

    fn options(&self) -> &Options {
        &self.options
    }
}

impl SerializerClass for FixedKeySerializerClass {
    fn name(&self) -> &str {
        "FixedKeySerializer"
    }

    fn type_key(&self) -> Option<&str> {
        self.type_key.as_deref()
    }

    fn build(&self, resource: Arc<dyn Resource>, options: Options) -> Box<dyn ItemSerializer> {
        Box::new(FixedKeySerializer {
            key: self.key.clone(),
            object: resource,
            options,
        })
    }
}

/// Basic serializer class that counts the items it builds
#[derive(Debug)]
pub struct CountingSerializerClass {
    inner: BasicSerializerClass,
    built: AtomicUsize,
}

impl CountingSerializerClass {
    /// Wrap a basic serializer class
    pub fn new(inner: BasicSerializerClass) -> Self {
        Self {
            inner,
            built: AtomicUsize::new(0),
        }
    }

    /// Number of items built so far
    pub fn built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

impl SerializerClass for CountingSerializerClass {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn type_key(&self) -> Option<&str> {
        self.inner.type_key()
    }

    fn build(&self, resource: Arc<dyn Resource>, options: Options) -> Box<dyn ItemSerializer> {
        self.built.fetch_add(1, Ordering::SeqCst);
        self.inner.build(resource, options)
    }
}
