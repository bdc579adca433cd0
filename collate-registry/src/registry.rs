//! Serializer registry
//!
//! The registry binds serializer classes to resources either by concrete
//! Rust type or by model name. A type binding is more specific and wins
//! over a model-name binding.

use crate::error::RegistryError;
use ahash::AHashMap;
use collate_core::{Resource, SerializerClass, SerializerLookup};
use std::any::{type_name, TypeId};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// How a serializer was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOrigin {
    /// Resolved from a binding on the resource's concrete type
    TypeBinding,
    /// Resolved from a binding on the resource's model name
    ModelName,
}

/// Listing entry for a registered binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInfo {
    /// Type name or model name the binding is keyed on
    pub key: String,
    /// Name of the bound serializer class
    pub serializer: String,
    /// Kind of binding
    pub origin: ResolutionOrigin,
}

struct TypeBinding {
    type_name: &'static str,
    class: Arc<dyn SerializerClass>,
}

#[derive(Default)]
struct Bindings {
    by_type: AHashMap<TypeId, TypeBinding>,
    by_model: AHashMap<String, Arc<dyn SerializerClass>>,
}

/// Registry of serializer classes
pub struct SerializerRegistry {
    bindings: RwLock<Bindings>,
}

impl SerializerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(Bindings::default()),
        }
    }

    /// Bind a serializer class to resources of type `R`
    ///
    /// # Errors
    ///
    /// Returns an error if `R` already has a binding
    pub fn register<R: Resource>(
        &self,
        class: Arc<dyn SerializerClass>,
    ) -> Result<(), RegistryError> {
        let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);
        let name = type_name::<R>();

        if bindings.by_type.contains_key(&TypeId::of::<R>()) {
            return Err(RegistryError::AlreadyRegistered {
                name: name.to_string(),
            });
        }

        debug!(resource = name, serializer = class.name(), "registered type binding");
        bindings.by_type.insert(
            TypeId::of::<R>(),
            TypeBinding {
                type_name: name,
                class,
            },
        );
        Ok(())
    }

    /// Bind a serializer class to resources reporting `model_name`
    ///
    /// # Errors
    ///
    /// Returns an error if the model name already has a binding
    pub fn register_model(
        &self,
        model_name: impl Into<String>,
        class: Arc<dyn SerializerClass>,
    ) -> Result<(), RegistryError> {
        let model_name = model_name.into();
        let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);

        if bindings.by_model.contains_key(&model_name) {
            return Err(RegistryError::AlreadyRegistered { name: model_name });
        }

        debug!(model = %model_name, serializer = class.name(), "registered model binding");
        bindings.by_model.insert(model_name, class);
        Ok(())
    }

    /// Remove the type binding for `R`
    pub fn unregister<R: Resource>(&self) -> Option<Arc<dyn SerializerClass>> {
        let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);
        bindings
            .by_type
            .remove(&TypeId::of::<R>())
            .map(|binding| binding.class)
    }

    /// Remove the model-name binding for `model_name`
    pub fn unregister_model(&self, model_name: &str) -> Option<Arc<dyn SerializerClass>> {
        let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);
        bindings.by_model.remove(model_name)
    }

    /// Resolve a serializer and report how it was found
    pub fn resolve(
        &self,
        resource: &dyn Resource,
    ) -> Option<(Arc<dyn SerializerClass>, ResolutionOrigin)> {
        let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(binding) = bindings.by_type.get(&resource.as_any().type_id()) {
            return Some((binding.class.clone(), ResolutionOrigin::TypeBinding));
        }

        resource
            .model_name()
            .and_then(|model| bindings.by_model.get(model))
            .map(|class| (class.clone(), ResolutionOrigin::ModelName))
    }

    /// List all bindings, type bindings first, each group sorted by key
    pub fn list(&self) -> Vec<BindingInfo> {
        let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);

        let mut by_type: Vec<BindingInfo> = bindings
            .by_type
            .values()
            .map(|binding| BindingInfo {
                key: binding.type_name.to_string(),
                serializer: binding.class.name().to_string(),
                origin: ResolutionOrigin::TypeBinding,
            })
            .collect();
        by_type.sort_by(|a, b| a.key.cmp(&b.key));

        let mut by_model: Vec<BindingInfo> = bindings
            .by_model
            .iter()
            .map(|(model, class)| BindingInfo {
                key: model.clone(),
                serializer: class.name().to_string(),
                origin: ResolutionOrigin::ModelName,
            })
            .collect();
        by_model.sort_by(|a, b| a.key.cmp(&b.key));

        by_type.extend(by_model);
        by_type
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
        bindings.by_type.len() + bindings.by_model.len()
    }

    /// Whether the registry has no bindings
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the global singleton instance
    pub fn global() -> &'static Self {
        static INSTANCE: std::sync::OnceLock<SerializerRegistry> = std::sync::OnceLock::new();
        INSTANCE.get_or_init(SerializerRegistry::new)
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SerializerLookup for SerializerRegistry {
    fn serializer_for(&self, resource: &dyn Resource) -> Option<Arc<dyn SerializerClass>> {
        let (class, origin) = self.resolve(resource)?;
        debug!(
            resource = %resource.describe(),
            serializer = class.name(),
            ?origin,
            "resolved serializer"
        );
        Some(class)
    }
}
