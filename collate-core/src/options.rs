//! Options record for collection and item serializers
//!
//! `Options` is an immutable snapshot taken at construction time. The
//! explicit serializer and lookup context are runtime capabilities; the
//! root key and pass-through options can also be loaded from a JSON
//! document through [`OptionsConfig`].

use crate::error::Result;
use crate::item::SerializerClass;
use crate::lookup::SerializerLookup;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Serializer options
#[derive(Clone, Default)]
pub struct Options {
    /// Explicit root key; always wins over computed keys
    pub root: Option<String>,
    /// Explicit serializer class used for every item
    pub serializer: Option<Arc<dyn SerializerClass>>,
    /// Lookup used when no explicit serializer is given
    pub serializer_context: Option<Arc<dyn SerializerLookup>>,
    /// Pass-through options forwarded to item serializers
    pub extra: Map<String, Value>,
}

impl Options {
    /// Create an empty options record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit root key
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the explicit serializer class
    pub fn with_serializer(mut self, serializer: Arc<dyn SerializerClass>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    /// Set the lookup context
    pub fn with_serializer_context(mut self, context: Arc<dyn SerializerLookup>) -> Self {
        self.serializer_context = Some(context);
        self
    }

    /// Add a pass-through option
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Look up a pass-through option
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Copy of these options without the explicit serializer.
    ///
    /// This is the record handed to each item serializer, so a serializer
    /// selector never leaks into item-level options.
    pub fn without_serializer(&self) -> Self {
        Self {
            serializer: None,
            ..self.clone()
        }
    }

    /// Build options from a parsed configuration
    pub fn from_config(config: OptionsConfig) -> Self {
        Self {
            root: config.root,
            serializer: None,
            serializer_context: None,
            extra: config.extra,
        }
    }

    /// Build options from a JSON value such as `{"root": "posts", "scope": "admin"}`
    pub fn from_json_value(value: Value) -> Result<Self> {
        let config: OptionsConfig = serde_json::from_value(value)?;
        Ok(Self::from_config(config))
    }

    /// Build options from a JSON string
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: OptionsConfig = serde_json::from_str(input)?;
        Ok(Self::from_config(config))
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("root", &self.root)
            .field("serializer", &self.serializer.as_ref().map(|s| s.name()))
            .field("serializer_context", &self.serializer_context.is_some())
            .field("extra", &self.extra)
            .finish()
    }
}

/// Serializable part of [`Options`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Explicit root key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Every other key is a pass-through option
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
