//! Collate Test Utilities
//!
//! This crate provides shared fixtures and helpers for the Collate tests:
//! sample resources, a collection builder with switchable capabilities,
//! instrumented serializer classes and tracing setup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub mod collections;
pub mod resources;
pub mod serializers;

pub use collections::{CollectionBuilder, StubCollection};
pub use resources::{comments, posts, Comment, Post, Tag};
pub use serializers::{CountingSerializerClass, FixedKeySerializerClass};

/// Install a test subscriber honouring `RUST_LOG`; safe to call from every test
pub fn init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
