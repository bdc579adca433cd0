//! Collection serializer
//!
//! Wraps a collection of resources, builds one item serializer per
//! resource and resolves the key the serialized collection is nested
//! under.

use collate_core::{
    CollateError, Collection, EnglishInflector, Inflector, ItemSerializer, Options,
    PaginationMeta, Resource, Result, SerializerClass, SerializerLookup,
};
use collate_registry::context_for;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Serializer for a collection of resources.
///
/// Construction is all-or-nothing: either every resource gets an item
/// serializer or construction fails with
/// [`CollateError::NoSerializerFound`] for the first resource that has
/// none. The instance is read-only afterwards.
pub struct CollectionSerializer {
    object: Arc<dyn Collection>,
    root: Option<String>,
    options: Options,
    serializers: Vec<Box<dyn ItemSerializer>>,
    inflector: Arc<dyn Inflector>,
}

impl CollectionSerializer {
    /// Build item serializers for every resource in `resources`.
    ///
    /// Each resource uses `options.serializer` when given, else the class
    /// the lookup context resolves for it. The context is
    /// `options.serializer_context`, else the process-wide default. Items
    /// receive `options` minus the explicit serializer.
    pub fn new(resources: Arc<dyn Collection>, options: Options) -> Result<Self> {
        Self::with_inflector(resources, options, Arc::new(EnglishInflector))
    }

    /// Like [`CollectionSerializer::new`] with a custom inflector for keys
    pub fn with_inflector(
        resources: Arc<dyn Collection>,
        options: Options,
        inflector: Arc<dyn Inflector>,
    ) -> Result<Self> {
        // The default context is only touched when some resource needs it.
        let context = match options.serializer {
            Some(_) => None,
            None => Some(context_for(&options)),
        };
        let item_options = options.without_serializer();

        let serializers = resources
            .resources()
            .iter()
            .map(|resource| -> Result<Box<dyn ItemSerializer>> {
                let class = resolve_class(&options, context.as_deref(), resource.as_ref())?;
                Ok(class.build(Arc::clone(resource), item_options.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            items = serializers.len(),
            root = ?options.root,
            explicit_serializer = options.serializer.as_ref().map(|s| s.name()),
            "built collection serializer"
        );

        Ok(Self {
            object: resources,
            root: options.root.clone(),
            options,
            serializers,
            inflector,
        })
    }

    /// The wrapped collection
    pub fn object(&self) -> &Arc<dyn Collection> {
        &self.object
    }

    /// Explicit root key, if one was given
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Options the serializer was built with
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Item serializers in collection order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.serializers.iter(),
        }
    }

    /// Number of item serializers
    pub fn len(&self) -> usize {
        self.serializers.len()
    }

    /// Whether the collection produced no item serializers
    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty()
    }

    /// Always true: a constructed collection serializer is successful
    pub fn is_success(&self) -> bool {
        true
    }

    /// Key the serialized collection is nested under.
    ///
    /// An explicit root is returned as given. Otherwise the first of these
    /// that is present is pluralized:
    ///
    /// 1. the explicit serializer's type key, for an empty collection
    /// 2. the first item serializer's key
    /// 3. the underscored collection name
    ///
    /// Only an absent key falls through; an empty key is a resolved key.
    pub fn json_key(&self) -> Option<String> {
        if let Some(root) = &self.root {
            return Some(root.clone());
        }

        self.type_key_for_empty()
            .or_else(|| self.serializers.first().and_then(|s| s.json_key()))
            .or_else(|| {
                self.object
                    .name()
                    .map(|name| self.inflector.underscore(name))
            })
            .map(|key| self.inflector.pluralize(&key))
    }

    /// Whether the collection offers current page, total pages and size
    pub fn is_paginated(&self) -> bool {
        PaginationMeta::is_offered_by(self.object.as_ref())
    }

    /// Pagination accessors of the collection, when it is paginated
    pub fn pagination(&self) -> Option<PaginationMeta> {
        PaginationMeta::from_collection(self.object.as_ref())
    }

    fn type_key_for_empty(&self) -> Option<String> {
        if !self.object.is_empty() {
            return None;
        }
        self.options
            .serializer
            .as_ref()?
            .type_key()
            .map(str::to_string)
    }
}

fn resolve_class(
    options: &Options,
    context: Option<&dyn SerializerLookup>,
    resource: &dyn Resource,
) -> Result<Arc<dyn SerializerClass>> {
    if let Some(explicit) = &options.serializer {
        return Ok(Arc::clone(explicit));
    }

    context
        .and_then(|context| context.serializer_for(resource))
        .ok_or_else(|| {
            let description = resource.describe();
            warn!(resource = %description, "no serializer found");
            CollateError::NoSerializerFound {
                resource: description,
            }
        })
}

impl fmt::Debug for CollectionSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionSerializer")
            .field("object", &self.object)
            .field("root", &self.root)
            .field("serializers", &self.serializers)
            .finish()
    }
}

/// Iterator over the item serializers of a [`CollectionSerializer`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Box<dyn ItemSerializer>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a dyn ItemSerializer;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|serializer| &**serializer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|serializer| &**serializer)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CollectionSerializer {
    type Item = &'a dyn ItemSerializer;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
