//! Error types for serializer registration

use thiserror::Error;

/// Errors raised while registering serializers or installing the default context
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A binding for the same key already exists
    #[error("Serializer already registered for '{name}'")]
    AlreadyRegistered {
        /// Type or model name of the existing binding
        name: String,
    },

    /// The process-wide default context was already installed
    #[error(
        "Default serializer context already installed.\n\
         \n\
         The default context is set once at startup. Pass a context through\n\
         the serializer_context option to use a different lookup."
    )]
    DefaultContextInstalled,
}
