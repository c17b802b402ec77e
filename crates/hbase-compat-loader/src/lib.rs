//! HBase Compat Loader: picks the compatibility layer for the running HBase
//!
//! # Resolution
//!
//! ```text
//! override? ──yes──> use it verbatim                      (explicit-override)
//!    │no
//!    ▼
//! detect version ──matches "<prefix>."──> 2.x ? default : HBaseCompat<prefix>
//!    │no match                                          (version-matched)
//!    ▼
//! default layer + notice                                  (default-fallback)
//! ```
//!
//! The first successful load is cached for the lifetime of the loader. Later
//! calls get the same instance whatever override they pass.
//!
//! # Example
//!
//! ```
//! use hbase_compat_core::{FixedVersion, Provenance};
//! use hbase_compat_loader::CompatLoader;
//!
//! let loader = CompatLoader::builtin(FixedVersion::new("1.2.6"));
//! let loaded = loader.load(None).unwrap();
//!
//! assert_eq!(loaded.compat.name(), "HBaseCompat1_2");
//! assert_eq!(
//!     loaded.selection.provenance,
//!     Provenance::VersionMatched { detected: "1.2.6".to_string() }
//! );
//! ```

pub mod config;
pub mod loader;

pub use config::{CompatConfig, ConfigError, COMPAT_CLASS_VAR};
pub use loader::{resolve_version, CompatLoader, LoadedCompat};

use hbase_compat_core::{CompatError, StorageCompat};
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL: Lazy<CompatLoader> =
    Lazy::new(|| CompatLoader::from_config(&CompatConfig::from_env()));

/// Process-wide loader built from the environment on first use
pub fn global() -> &'static CompatLoader {
    &GLOBAL
}

/// Shorthand for `global().get_compat(override_name)`
pub fn get_compat(override_name: Option<&str>) -> Result<Arc<dyn StorageCompat>, CompatError> {
    global().get_compat(override_name)
}
