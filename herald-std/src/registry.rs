//! Immutable name-to-sender registry.

use herald_core::{DynSender, RegistryError};
use std::{collections::HashMap, sync::Arc};

/// A registry of senders keyed by function name.
///
/// Registries are populated once through a [`RegistryBuilder`] and never
/// mutated afterwards. Cloning is cheap and shares the underlying senders.
#[derive(Clone, Default)]
pub struct Registry {
    senders: Arc<HashMap<String, Arc<dyn DynSender>>>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolve a function name to its sender.
    pub fn route(&self, name: &str) -> Option<&dyn DynSender> {
        self.senders.get(name).map(|sender| &**sender)
    }

    /// Check if a function name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.senders.contains_key(name)
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.senders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered functions.
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("functions", &self.names())
            .finish()
    }
}

/// Builder for constructing a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    senders: HashMap<String, Arc<dyn DynSender>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sender under a function name.
    ///
    /// Fails if the name is empty or already taken.
    pub fn register<S: DynSender>(
        mut self,
        name: impl Into<String>,
        sender: S,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.senders.contains_key(&name) {
            return Err(RegistryError::AlreadyExists(name));
        }
        self.senders.insert(name, Arc::new(sender));
        Ok(self)
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        Registry {
            senders: Arc::new(self.senders),
        }
    }
}
