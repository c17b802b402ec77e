//! Data Model: descriptors handed through the compat layer and selection records
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client API generation a descriptor was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorApi {
    /// Mutable HTableDescriptor/HColumnDescriptor (0.98 and 1.0)
    Legacy,
    /// Builder-style descriptors (1.1 onwards)
    Builder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    None,
    Gz,
    Lzo,
    Snappy,
    Lz4,
    Zstd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFamilyDescriptor {
    pub name: String,
    pub compression: Compression,
    pub api: Option<DescriptorApi>,
}

impl ColumnFamilyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            compression: Compression::None,
            api: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub table: String,
    pub api: DescriptorApi,
    pub families: Vec<ColumnFamilyDescriptor>,
}

impl TableDescriptor {
    pub fn family(&self, name: &str) -> Option<&ColumnFamilyDescriptor> {
        self.families.iter().find(|f| f.name == name)
    }
}

/// Delete mutation for a single row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delete {
    pub row: Vec<u8>,
    pub timestamp: Option<i64>,
}

impl Delete {
    pub fn new(row: impl Into<Vec<u8>>) -> Self {
        Self {
            row: row.into(),
            timestamp: None,
        }
    }
}

/// Why a particular implementation name was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Provenance {
    /// Name supplied by the caller, used verbatim
    ExplicitOverride,
    /// Detected version matched a supported prefix
    VersionMatched { detected: String },
    /// Detected version matched nothing; the default was taken
    DefaultFallback { detected: String },
}

impl Provenance {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::DefaultFallback { .. })
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ExplicitOverride => write!(f, "explicit-override"),
            Self::VersionMatched { detected } => write!(f, "version-matched:{}", detected),
            Self::DefaultFallback { .. } => write!(f, "default-fallback"),
        }
    }
}

/// Resolved implementation name plus its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub provenance: Provenance,
}

impl Selection {
    pub fn new(name: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            name: name.into(),
            provenance,
        }
    }
}
