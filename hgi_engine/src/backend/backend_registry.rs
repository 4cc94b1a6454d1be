/// Registry of backend factories keyed by device kind

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::backend::{Config, DeviceKind, Hgi};

/// Backend factory function type
type BackendFactory = Box<dyn Fn(&Config) -> Result<Box<dyn Hgi>> + Send + Sync>;

/// Maps each [`DeviceKind`] to the factory creating its backend
///
/// The registry is an ordinary value owned by the application: the device
/// kind is always passed explicitly to [`create`](BackendRegistry::create).
///
/// # Example
///
/// ```ignore
/// let mut registry = BackendRegistry::new();
/// hgi_engine_backend_gl::register(&mut registry, || Box::new(MyGlDevice::new()));
/// let mut hgi = registry.create(DeviceKind::OpenGl, &Config::default())?;
/// ```
#[derive(Default)]
pub struct BackendRegistry {
    factories: FxHashMap<DeviceKind, BackendFactory>,
}

impl BackendRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for a device kind
    pub fn register<F>(&mut self, kind: DeviceKind, factory: F)
    where
        F: Fn(&Config) -> Result<Box<dyn Hgi>> + Send + Sync + 'static,
    {
        if self.factories.insert(kind, Box::new(factory)).is_some() {
            crate::engine_warn!("hgi::BackendRegistry", "Replacing {} backend factory", kind.name());
        } else {
            crate::engine_debug!("hgi::BackendRegistry", "Registered {} backend", kind.name());
        }
    }

    /// Whether a backend is registered for this device kind
    pub fn supports(&self, kind: DeviceKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Create a backend for the given device kind
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if no backend is registered for `kind`
    /// - any error returned by the factory itself
    pub fn create(&self, kind: DeviceKind, config: &Config) -> Result<Box<dyn Hgi>> {
        let factory = self.factories.get(&kind).ok_or_else(|| {
            crate::engine_error!("hgi::BackendRegistry", "No backend registered for {}", kind.name());
            Error::InvalidArgument(format!("no backend registered for {}", kind.name()))
        })?;
        let hgi = factory(config)?;
        crate::engine_info!("hgi::BackendRegistry", "Created {} backend for '{}'", kind.name(), config.app_name);
        Ok(hgi)
    }
}

#[cfg(test)]
#[path = "backend_registry_tests.rs"]
mod tests;
