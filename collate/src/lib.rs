//! Collate - Collection serialization
//!
//! This crate serializes a collection of resources by delegating each
//! resource to an item serializer:
//!
//! - Item serializer resolution, explicit or through a lookup context
//! - Root key resolution and pluralization
//! - Pagination probing
//!
//! # Example
//!
//! ```rust,ignore
//! use collate::{BasicSerializerClass, CollectionSerializer, Options, ResourceList};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(collate::SerializerRegistry::new());
//! registry.register::<Post>(Arc::new(BasicSerializerClass::new("PostSerializer")))?;
//!
//! let posts: ResourceList = load_posts().into_iter().collect();
//! let serializer = CollectionSerializer::new(
//!     Arc::new(posts),
//!     Options::new().with_serializer_context(registry),
//! )?;
//! assert_eq!(serializer.json_key().as_deref(), Some("posts"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod collection_serializer;

// Re-export commonly used types
pub use collate_core::{
    BasicSerializer, BasicSerializerClass, CollateError, Collection, EnglishInflector, Inflector,
    ItemSerializer, NamedCollection, Options, OptionsConfig, Page, PaginationMeta, Resource,
    ResourceList, Result, SerializerClass, SerializerLookup,
};
pub use collate_registry::{
    default_context, install_default_context, RegistryError, ResolutionOrigin, SerializerRegistry,
};
pub use collection_serializer::{CollectionSerializer, Iter};
