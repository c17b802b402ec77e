//! Compatibility Matrix: which HBase release lines map onto which layer
use serde::{Deserialize, Serialize};

pub const COMPAT_NAME_STEM: &str = "HBaseCompat";

/// All 2.x releases and unrecognized versions load this layer.
pub const DEFAULT_COMPAT_NAME: &str = "HBaseCompat1_1";

/// Most recent release line the default layer is reported as covering
pub const DEFAULT_COMPAT_VERSION: &str = "1.2";

pub const HBASE_VERSION_2_PREFIX: &str = "2.";

pub const HBASE_SUPPORTED_VERSIONS: [&str; 6] = ["0.98", "1.0", "1.1", "1.2", "1.3", "2.0"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatMatrix {
    /// Ordered version prefixes; the first one matching wins
    pub supported_versions: Vec<String>,
    pub name_stem: String,
    pub default_name: String,
    pub default_version: String,
}

impl CompatMatrix {
    pub fn new(supported_versions: Vec<String>) -> Self {
        Self {
            supported_versions,
            name_stem: COMPAT_NAME_STEM.to_string(),
            default_name: DEFAULT_COMPAT_NAME.to_string(),
            default_version: DEFAULT_COMPAT_VERSION.to_string(),
        }
    }

    pub fn hbase() -> Self {
        Self::new(HBASE_SUPPORTED_VERSIONS.iter().map(|v| v.to_string()).collect())
    }

    /// Derives the layer name for a supported prefix: "1.1" -> "HBaseCompat1_1"
    pub fn implementation_name(&self, prefix: &str) -> String {
        format!("{}{}", self.name_stem, prefix.replace('.', "_"))
    }

    /// First supported prefix `p` such that `version` starts with `p.`
    pub fn match_version(&self, version: &str) -> Option<&str> {
        self.supported_versions
            .iter()
            .map(String::as_str)
            .find(|prefix| {
                version
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('.'))
            })
    }

    pub fn is_major_two(version: &str) -> bool {
        version.starts_with(HBASE_VERSION_2_PREFIX)
    }
}

impl Default for CompatMatrix {
    fn default() -> Self {
        Self::hbase()
    }
}
