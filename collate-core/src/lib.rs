//! Collate Core - Primitives for collection serialization
//!
//! This crate provides the building blocks shared by the Collate crates,
//! with no registry or global state. It includes:
//!
//! - Error types
//! - Resource and collection capabilities
//! - Options record and its JSON configuration form
//! - Item serializer and serializer class traits
//! - The serializer lookup trait
//! - English inflection for keys
//! - Pagination metadata

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod collection;
pub mod error;
pub mod inflection;
pub mod item;
pub mod lookup;
pub mod options;
pub mod pagination;
pub mod resource;

// Re-export commonly used types
pub use collection::{Collection, NamedCollection, Page, ResourceList};
pub use error::{CollateError, Result};
pub use inflection::{EnglishInflector, Inflector};
pub use item::{BasicSerializer, BasicSerializerClass, ItemSerializer, SerializerClass};
pub use lookup::SerializerLookup;
pub use options::{Options, OptionsConfig};
pub use pagination::PaginationMeta;
pub use resource::Resource;
