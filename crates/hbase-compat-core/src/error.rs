//! Unified Error Model
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure kinds reported by construct-by-name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryErrorKind {
    NotFound,
    InstantiationFailed,
    AccessDenied,
}

impl fmt::Display for RegistryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::NotFound => "NotFound",
            Self::InstantiationFailed => "InstantiationFailed",
            Self::AccessDenied => "AccessDenied",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("REGISTRY/{kind}: {name}: {message}")]
pub struct RegistryError {
    pub kind: RegistryErrorKind,
    pub name: String,
    pub message: String,
}

impl RegistryError {
    pub fn new(kind: RegistryErrorKind, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self::new(RegistryErrorKind::NotFound, name, "no implementation registered under this name")
    }

    pub fn access_denied(name: &str) -> Self {
        Self::new(RegistryErrorKind::AccessDenied, name, "implementation is not constructible by name")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("VERSION/UNAVAILABLE: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompatError {
    #[error("{kind} when instantiating HBase compatibility class {class_name}: {message}")]
    Initialization {
        kind: RegistryErrorKind,
        class_name: String,
        message: String,
    },

    #[error(transparent)]
    Version(#[from] VersionError),
}

impl CompatError {
    /// Wraps a construct-by-name failure for the implementation `class_name`.
    pub fn initialization(class_name: &str, err: RegistryError) -> Self {
        Self::Initialization {
            kind: err.kind,
            class_name: class_name.to_string(),
            message: err.message,
        }
    }

    pub fn kind(&self) -> Option<RegistryErrorKind> {
        match self {
            Self::Initialization { kind, .. } => Some(*kind),
            Self::Version(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_keeps_kind_name_and_message() {
        let err = CompatError::initialization(
            "HBaseCompat9_9",
            RegistryError::not_found("HBaseCompat9_9"),
        );

        assert_eq!(err.kind(), Some(RegistryErrorKind::NotFound));
        assert_eq!(
            err.to_string(),
            "NotFound when instantiating HBase compatibility class HBaseCompat9_9: \
             no implementation registered under this name"
        );
    }

    #[test]
    fn test_version_error_is_transparent() {
        let err: CompatError = VersionError::Unavailable("HBASE_VERSION not set".into()).into();
        assert_eq!(err.to_string(), "VERSION/UNAVAILABLE: HBASE_VERSION not set");
        assert_eq!(err.kind(), None);
    }
}
