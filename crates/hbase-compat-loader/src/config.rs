//! Loader configuration, from YAML files or the environment
use hbase_compat_core::DEFAULT_VERSION_VAR;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the compat class override
pub const COMPAT_CLASS_VAR: &str = "HBASE_COMPAT_CLASS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CONFIG/IO: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG/YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CompatConfig {
    /// Layer name used instead of version detection
    pub compat_class: Option<String>,
    /// Pins the reported HBase version
    pub hbase_version: Option<String>,
}

impl CompatConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config.normalized())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds a config from a variable lookup; blank values count as unset
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            compat_class: lookup(COMPAT_CLASS_VAR),
            hbase_version: lookup(DEFAULT_VERSION_VAR),
        }
        .normalized()
    }

    /// Values set in `other` win
    pub fn merge(self, other: Self) -> Self {
        Self {
            compat_class: other.compat_class.or(self.compat_class),
            hbase_version: other.hbase_version.or(self.hbase_version),
        }
    }

    pub fn override_name(&self) -> Option<&str> {
        self.compat_class.as_deref()
    }

    fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            compat_class: clean(self.compat_class),
            hbase_version: clean(self.hbase_version),
        }
    }
}
