//! Collate Registry - Serializer lookup
//!
//! This crate resolves item serializers for resources:
//!
//! - A registry binding serializer classes by resource type or model name
//! - The process-wide default context used when no context is given

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod registry;

pub use collate_core::{SerializerClass, SerializerLookup};
pub use context::{context_for, default_context, install_default_context};
pub use error::RegistryError;
pub use registry::{BindingInfo, ResolutionOrigin, SerializerRegistry};
