//! Implementation Registry: construct a compat layer from its name
use crate::builtin::{BuiltinCompat, HBaseCompat};
use crate::RegistryEntry;
use hbase_compat_core::{RegistryError, RegistryErrorKind, StorageCompat};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Builds one instance; an `Err` message is reported as `InstantiationFailed`.
pub type Constructor = Box<dyn Fn() -> Result<Arc<dyn StorageCompat>, String> + Send + Sync>;

pub trait ImplementationRegistry: Send + Sync {
    fn construct_by_name(&self, name: &str) -> Result<Arc<dyn StorageCompat>, RegistryError>;
}

/// Name-keyed table of constructors.
#[derive(Default)]
pub struct StaticRegistry {
    constructors: BTreeMap<String, Constructor>,
    denied: BTreeSet<String>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in HBase compat layer
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for variant in BuiltinCompat::ALL {
            registry.register(variant.name(), move || {
                Ok(Arc::new(HBaseCompat::new(variant)) as Arc<dyn StorageCompat>)
            });
        }
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn() -> Result<Arc<dyn StorageCompat>, String> + Send + Sync + 'static,
    {
        let name = name.into();
        self.denied.remove(&name);
        self.constructors.insert(name, Box::new(constructor));
        self
    }

    /// Marks `name` as known but not constructible by name
    pub fn deny(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.constructors.remove(&name);
        self.denied.insert(name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    pub fn entries(&self) -> Vec<RegistryEntry> {
        let mut entries: Vec<RegistryEntry> = self
            .constructors
            .keys()
            .map(|name| RegistryEntry { name: name.clone(), constructible: true })
            .chain(
                self.denied
                    .iter()
                    .map(|name| RegistryEntry { name: name.clone(), constructible: false }),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

impl ImplementationRegistry for StaticRegistry {
    fn construct_by_name(&self, name: &str) -> Result<Arc<dyn StorageCompat>, RegistryError> {
        if self.denied.contains(name) {
            return Err(RegistryError::access_denied(name));
        }

        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| RegistryError::not_found(name))?;

        let compat = constructor()
            .map_err(|msg| RegistryError::new(RegistryErrorKind::InstantiationFailed, name, msg))?;
        tracing::debug!(name, "constructed compat layer");
        Ok(compat)
    }
}

impl<T: ImplementationRegistry + ?Sized> ImplementationRegistry for Arc<T> {
    fn construct_by_name(&self, name: &str) -> Result<Arc<dyn StorageCompat>, RegistryError> {
        (**self).construct_by_name(name)
    }
}

impl fmt::Debug for StaticRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StaticRegistry")
            .field("constructors", &self.names())
            .field("denied", &self.denied)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::CompatMatrix;

    #[test]
    fn test_builtin_covers_every_derived_name_but_two() {
        let registry = StaticRegistry::builtin();
        let matrix = CompatMatrix::hbase();

        for prefix in &matrix.supported_versions {
            let name = matrix.implementation_name(prefix);
            // 2.x is served by the default layer
            assert_eq!(registry.contains(&name), !prefix.starts_with("2."), "{}", name);
        }
        assert!(registry.contains(&matrix.default_name));
    }

    #[test]
    fn test_construct_builtin() {
        let registry = StaticRegistry::builtin();
        let compat = registry.construct_by_name("HBaseCompat1_3").unwrap();
        assert_eq!(compat.name(), "HBaseCompat1_3");
        assert_eq!(compat.hbase_line(), "1.3");
    }

    #[test]
    fn test_not_found() {
        let err = StaticRegistry::builtin()
            .construct_by_name("HBaseCompat3_0")
            .unwrap_err();
        assert_eq!(err.kind, RegistryErrorKind::NotFound);
        assert_eq!(err.name, "HBaseCompat3_0");
    }

    #[test]
    fn test_instantiation_failed_keeps_message() {
        let mut registry = StaticRegistry::new();
        registry.register("Broken", || Err("connection factory missing".to_string()));

        let err = registry.construct_by_name("Broken").unwrap_err();
        assert_eq!(err.kind, RegistryErrorKind::InstantiationFailed);
        assert_eq!(err.message, "connection factory missing");
    }

    #[test]
    fn test_deny_overrides_registration() {
        let mut registry = StaticRegistry::builtin();
        registry.deny("HBaseCompat1_0");

        let err = registry.construct_by_name("HBaseCompat1_0").unwrap_err();
        assert_eq!(err.kind, RegistryErrorKind::AccessDenied);
        assert!(!registry.contains("HBaseCompat1_0"));

        let entry = registry
            .entries()
            .into_iter()
            .find(|e| e.name == "HBaseCompat1_0")
            .unwrap();
        assert!(!entry.constructible);
    }

    #[test]
    fn test_names_sorted() {
        let registry = StaticRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec![
                "HBaseCompat0_98",
                "HBaseCompat1_0",
                "HBaseCompat1_1",
                "HBaseCompat1_2",
                "HBaseCompat1_3",
            ]
        );
    }
}
