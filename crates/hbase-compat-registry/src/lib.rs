//! HBase Compat Registry: supported versions and construct-by-name
pub mod builtin;
pub mod compat;
pub mod registry;

pub use builtin::{BuiltinCompat, HBaseCompat};
pub use compat::{
    CompatMatrix, COMPAT_NAME_STEM, DEFAULT_COMPAT_NAME, DEFAULT_COMPAT_VERSION,
    HBASE_SUPPORTED_VERSIONS, HBASE_VERSION_2_PREFIX,
};
pub use registry::{Constructor, ImplementationRegistry, StaticRegistry};

use serde::{Deserialize, Serialize};

/// Listing record for one registered implementation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub constructible: bool,
}
