//! Compat Loader: resolve, construct, and cache the layer exactly once
use crate::config::CompatConfig;
use hbase_compat_core::{
    CompatError, EnvVersion, FixedVersion, Provenance, Selection, StorageCompat, VersionSource,
};
use hbase_compat_registry::{CompatMatrix, ImplementationRegistry, StaticRegistry};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// A constructed layer together with the reason it was chosen
#[derive(Debug, Clone)]
pub struct LoadedCompat {
    pub selection: Selection,
    pub compat: Arc<dyn StorageCompat>,
}

pub struct CompatLoader {
    matrix: CompatMatrix,
    versions: Box<dyn VersionSource>,
    registry: Box<dyn ImplementationRegistry>,
    cached: OnceCell<LoadedCompat>,
}

impl CompatLoader {
    pub fn new<V, R>(versions: V, registry: R) -> Self
    where
        V: VersionSource + 'static,
        R: ImplementationRegistry + 'static,
    {
        Self {
            matrix: CompatMatrix::hbase(),
            versions: Box::new(versions),
            registry: Box::new(registry),
            cached: OnceCell::new(),
        }
    }

    /// Loader over the built-in layers
    pub fn builtin<V: VersionSource + 'static>(versions: V) -> Self {
        Self::new(versions, StaticRegistry::builtin())
    }

    /// Built-in layers; version pinned by `hbase-version` or read from the environment
    pub fn from_config(config: &CompatConfig) -> Self {
        match &config.hbase_version {
            Some(version) => Self::builtin(FixedVersion::new(version.clone())),
            None => Self::builtin(EnvVersion::default()),
        }
    }

    pub fn with_matrix(mut self, matrix: CompatMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn matrix(&self) -> &CompatMatrix {
        &self.matrix
    }

    pub fn get_compat(
        &self,
        override_name: Option<&str>,
    ) -> Result<Arc<dyn StorageCompat>, CompatError> {
        self.load(override_name).map(|loaded| Arc::clone(&loaded.compat))
    }

    /// Returns the cached layer, loading it first if this is the first call.
    ///
    /// Concurrent first calls block until one of them has finished; only
    /// that one resolves and constructs. A failed load leaves the cache
    /// empty, so the next call resolves again.
    pub fn load(&self, override_name: Option<&str>) -> Result<&LoadedCompat, CompatError> {
        if let Some(loaded) = self.cached.get() {
            tracing::debug!(
                compat = loaded.compat.name(),
                "Returning cached HBase compatibility layer"
            );
            return Ok(loaded);
        }

        self.cached.get_or_try_init(|| self.initialize(override_name))
    }

    fn initialize(&self, override_name: Option<&str>) -> Result<LoadedCompat, CompatError> {
        let selection = self.resolve(override_name)?;

        let compat = self
            .registry
            .construct_by_name(&selection.name)
            .map_err(|err| CompatError::initialization(&selection.name, err))?;

        tracing::info!(
            provenance = %selection.provenance,
            compat = compat.name(),
            "Instantiated HBase compatibility layer {}",
            selection.name
        );
        Ok(LoadedCompat { selection, compat })
    }

    /// Picks the implementation name without constructing it
    pub fn resolve(&self, override_name: Option<&str>) -> Result<Selection, CompatError> {
        if let Some(name) = override_name.filter(|name| !name.is_empty()) {
            return Ok(Selection::new(name, Provenance::ExplicitOverride));
        }

        let detected = self.versions.detect_version()?;
        Ok(resolve_version(&self.matrix, &detected))
    }

    pub fn cached(&self) -> Option<&LoadedCompat> {
        self.cached.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Empties the cache of a loader the caller owns outright
    pub fn reset(&mut self) -> Option<LoadedCompat> {
        self.cached.take()
    }
}

/// Maps a detected HBase version onto a layer name.
pub fn resolve_version(matrix: &CompatMatrix, detected: &str) -> Selection {
    if let Some(prefix) = matrix.match_version(detected) {
        // All HBase 2.x maps to the default layer
        let name = if CompatMatrix::is_major_two(detected) {
            matrix.default_name.clone()
        } else {
            matrix.implementation_name(prefix)
        };
        return Selection::new(
            name,
            Provenance::VersionMatched {
                detected: detected.to_string(),
            },
        );
    }

    tracing::info!(
        "The HBase version {} is not explicitly supported. Loading the compatibility layer \
         for the most recent supported HBase version ({})",
        detected,
        matrix.default_version
    );
    Selection::new(
        matrix.default_name.clone(),
        Provenance::DefaultFallback {
            detected: detected.to_string(),
        },
    )
}

impl fmt::Debug for CompatLoader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CompatLoader")
            .field("matrix", &self.matrix)
            .field("cached", &self.cached.get().map(|l| &l.selection))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CompatMatrix {
        CompatMatrix::hbase()
    }

    #[test]
    fn test_non_two_prefixes_derive_name() {
        let cases = [
            ("0.98.5", "HBaseCompat0_98"),
            ("1.0.3", "HBaseCompat1_0"),
            ("1.1.12", "HBaseCompat1_1"),
            ("1.2.4", "HBaseCompat1_2"),
            ("1.3.1-SNAPSHOT", "HBaseCompat1_3"),
        ];

        for (version, expected) in cases {
            let selection = resolve_version(&matrix(), version);
            assert_eq!(selection.name, expected, "version {}", version);
            assert_eq!(
                selection.provenance,
                Provenance::VersionMatched { detected: version.to_string() }
            );
        }
    }

    #[test]
    fn test_two_x_matched_maps_to_default() {
        let selection = resolve_version(&matrix(), "2.0.5");
        assert_eq!(selection.name, "HBaseCompat1_1");
        assert!(matches!(selection.provenance, Provenance::VersionMatched { .. }));
    }

    #[test]
    fn test_two_x_unlisted_falls_back_to_default() {
        for version in ["2.1.0", "2.4.17", "2.5.0-hadoop3"] {
            let selection = resolve_version(&matrix(), version);
            assert_eq!(selection.name, "HBaseCompat1_1", "version {}", version);
            assert!(selection.provenance.is_fallback());
        }
    }

    #[test]
    fn test_unknown_versions_fall_back() {
        for version in ["9.9", "1.20.0", "1.2", "", "garbage"] {
            let selection = resolve_version(&matrix(), version);
            assert_eq!(selection.name, "HBaseCompat1_1", "version {:?}", version);
            assert_eq!(
                selection.provenance,
                Provenance::DefaultFallback { detected: version.to_string() }
            );
        }
    }

    #[test]
    fn test_custom_matrix_two_x_check_follows_match() {
        // a bare major prefix matches every 2.x release
        let custom = CompatMatrix::new(vec!["2".to_string()]);
        let selection = resolve_version(&custom, "2.7.1");
        assert_eq!(selection.name, custom.default_name);
        assert!(matches!(selection.provenance, Provenance::VersionMatched { .. }));
    }

    #[test]
    fn test_override_ignores_version() {
        let loader = CompatLoader::builtin(FixedVersion::new("0.98.5"));
        let selection = loader.resolve(Some("custom.Impl")).unwrap();
        assert_eq!(selection, Selection::new("custom.Impl", Provenance::ExplicitOverride));
    }

    #[test]
    fn test_empty_override_is_absent() {
        let loader = CompatLoader::builtin(FixedVersion::new("1.3.0"));
        let selection = loader.resolve(Some("")).unwrap();
        assert_eq!(selection.name, "HBaseCompat1_3");
    }

    #[test]
    fn test_reset_clears_cache() {
        let mut loader = CompatLoader::builtin(FixedVersion::new("1.0.0"));
        loader.load(None).unwrap();
        assert!(loader.is_loaded());

        let previous = loader.reset().unwrap();
        assert_eq!(previous.compat.name(), "HBaseCompat1_0");
        assert!(!loader.is_loaded());

        let loaded = loader.load(Some("HBaseCompat1_2")).unwrap();
        assert_eq!(loaded.compat.name(), "HBaseCompat1_2");
    }
}
