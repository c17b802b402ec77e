//! HBase Compat Core: capability trait, version sources, and data model
//!
//! Every compatibility layer implements [`StorageCompat`]. The loader picks
//! one per process based on the HBase version reported by a [`VersionSource`].

pub mod compat;
pub mod data_model;
pub mod error;
pub mod version;

pub use compat::StorageCompat;
pub use data_model::{
    ColumnFamilyDescriptor, Compression, Delete, DescriptorApi, Provenance, Selection,
    TableDescriptor,
};
pub use error::{CompatError, RegistryError, RegistryErrorKind, VersionError};
pub use version::{EnvVersion, FixedVersion, VersionSource, DEFAULT_VERSION_VAR};
