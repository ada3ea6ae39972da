//! Module registry - named collaborators that can be loaded by name.
//!
//! Loading a module runs its initializer and returns its export table.
//! The runner never looks inside a module beyond asking whether its exports
//! support keyed field access.

pub mod server;

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::ModuleLoadError;

/// Initializer for a registered module.
pub type ModuleInit = fn(&LoadContext) -> Result<Value, ModuleLoadError>;

/// Environment handed to module initializers.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// Directory used to resolve file references.
    pub base_dir: PathBuf,
}

impl LoadContext {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Default for LoadContext {
    fn default() -> Self {
        Self::new(crate::config::config_base_dir())
    }
}

/// A loaded module and its exports.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    exports: Value,
}

impl Module {
    pub fn new(name: impl Into<String>, exports: Value) -> Self {
        Self {
            name: name.into(),
            exports,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exports(&self) -> &Value {
        &self.exports
    }

    /// Whether the exports are a keyed record rather than a primitive or list.
    pub fn supports_field_access(&self) -> bool {
        self.exports.is_object()
    }

    /// Look up an exported field by key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.exports.as_object().and_then(|fields| fields.get(key))
    }
}

/// Something that can resolve a module name to a loaded module.
pub trait ModuleLoader {
    fn load(&self, name: &str, ctx: &LoadContext) -> Result<Module, ModuleLoadError>;
}

/// Registry mapping module names to their initializers.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, ModuleInit>,
}

impl ModuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every module the app ships.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(server::MODULE_NAME, server::init);
        registry
    }

    /// Add or replace the initializer for `name`.
    pub fn register(&mut self, name: impl Into<String>, init: ModuleInit) -> &mut Self {
        let name = name.into();
        if self.modules.insert(name.clone(), init).is_some() {
            debug!(module = %name, "Replaced module initializer");
        } else {
            debug!(module = %name, "Registered module");
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ModuleLoader for ModuleRegistry {
    fn load(&self, name: &str, ctx: &LoadContext) -> Result<Module, ModuleLoadError> {
        let init = self
            .modules
            .get(name)
            .ok_or_else(|| ModuleLoadError::NotFound(name.to_string()))?;

        let exports = init(ctx)?;
        info!(module = %name, base_dir = %ctx.base_dir.display(), "Loaded module");
        Ok(Module::new(name, exports))
    }
}
