//! Version sources: where the runtime HBase version string comes from
use crate::error::VersionError;

/// Environment variable read by [`EnvVersion::default`]
pub const DEFAULT_VERSION_VAR: &str = "HBASE_VERSION";

/// Reports the dot-delimited version of the HBase client in use (ex: "1.2.4")
pub trait VersionSource: Send + Sync {
    fn detect_version(&self) -> Result<String, VersionError>;
}

/// A version pinned up front, by configuration or by tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedVersion(pub String);

impl FixedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl VersionSource for FixedVersion {
    fn detect_version(&self) -> Result<String, VersionError> {
        Ok(self.0.clone())
    }
}

/// Reads the version from an environment variable on every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVersion {
    pub var: String,
}

impl EnvVersion {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvVersion {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_VAR)
    }
}

impl VersionSource for EnvVersion {
    fn detect_version(&self) -> Result<String, VersionError> {
        std::env::var(&self.var)
            .map_err(|e| VersionError::Unavailable(format!("{}: {}", self.var, e)))
    }
}

impl<T: VersionSource + ?Sized> VersionSource for Box<T> {
    fn detect_version(&self) -> Result<String, VersionError> {
        (**self).detect_version()
    }
}
