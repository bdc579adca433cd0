//! Process-wide default serializer context
//!
//! Collection serializers that are not given a `serializer_context` option
//! resolve item serializers through the default context. An application
//! installs its context once at startup with [`install_default_context`];
//! until then the default is [`SerializerRegistry::global`].

use crate::error::RegistryError;
use crate::registry::SerializerRegistry;
use collate_core::{Options, Resource, SerializerClass, SerializerLookup};
use std::sync::{Arc, OnceLock};
use tracing::info;

static DEFAULT_CONTEXT: OnceLock<Arc<dyn SerializerLookup>> = OnceLock::new();

/// Install the process-wide default context
///
/// # Errors
///
/// Returns an error if a default context was already installed or the
/// global registry was already handed out as the default
pub fn install_default_context(context: Arc<dyn SerializerLookup>) -> Result<(), RegistryError> {
    DEFAULT_CONTEXT
        .set(context)
        .map_err(|_| RegistryError::DefaultContextInstalled)?;
    info!("installed default serializer context");
    Ok(())
}

/// The process-wide default context
pub fn default_context() -> Arc<dyn SerializerLookup> {
    DEFAULT_CONTEXT
        .get_or_init(|| Arc::new(GlobalRegistry) as Arc<dyn SerializerLookup>)
        .clone()
}

/// The context named in `options`, else the process-wide default
pub fn context_for(options: &Options) -> Arc<dyn SerializerLookup> {
    options
        .serializer_context
        .clone()
        .unwrap_or_else(default_context)
}

/// Lookup delegating to the global registry
struct GlobalRegistry;

impl SerializerLookup for GlobalRegistry {
    fn serializer_for(&self, resource: &dyn Resource) -> Option<Arc<dyn SerializerClass>> {
        SerializerRegistry::global().serializer_for(resource)
    }
}
