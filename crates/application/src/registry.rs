//! Explicit plugin registration.

use std::collections::BTreeMap;
use std::sync::Arc;

use octoauth_domain::PluginDefinition;
use tracing::info;

use crate::error::{ApplicationError, ApplicationResult};
use crate::plugin::OauthProviderPlugin;

/// Table of OAuth provider plugins keyed by id.
///
/// Populated once at startup; lookups are read-only afterwards.
#[derive(Default, Clone)]
pub struct PluginRegistry {
    plugins: BTreeMap<&'static str, Arc<dyn OauthProviderPlugin>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin under its definition id.
    ///
    /// # Errors
    /// Returns [`ApplicationError::DuplicatePlugin`] if the id is taken.
    pub fn register(&mut self, plugin: Arc<dyn OauthProviderPlugin>) -> ApplicationResult<()> {
        let definition = plugin.definition();
        if self.plugins.contains_key(definition.id) {
            return Err(ApplicationError::DuplicatePlugin(definition.id.to_string()));
        }
        info!(id = definition.id, label = definition.label, "registered OAuth plugin");
        self.plugins.insert(definition.id, plugin);
        Ok(())
    }

    /// Looks up a plugin.
    ///
    /// # Errors
    /// Returns [`ApplicationError::PluginNotFound`] for unknown ids.
    pub fn get(&self, id: &str) -> ApplicationResult<Arc<dyn OauthProviderPlugin>> {
        self.plugins
            .get(id)
            .cloned()
            .ok_or_else(|| ApplicationError::PluginNotFound(id.to_string()))
    }

    /// Registration records in id order.
    #[must_use]
    pub fn definitions(&self) -> Vec<PluginDefinition> {
        self.plugins.values().map(|p| p.definition()).collect()
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.plugins.keys()).finish()
    }
}
