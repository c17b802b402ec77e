//! StorageCompat: the single contract every compatibility layer provides
use crate::data_model::{ColumnFamilyDescriptor, Compression, Delete, TableDescriptor};
use std::fmt::Debug;

/// Stable view over the HBase client API, one implementation per release line.
pub trait StorageCompat: Send + Sync + Debug {
    /// Registry name of the implementation (ex: "HBaseCompat1_1")
    fn name(&self) -> &'static str;

    /// Release line this layer was written against (ex: "1.1")
    fn hbase_line(&self) -> &'static str;

    /// Creates an empty descriptor for `table`
    fn new_table_descriptor(&self, table: &str) -> TableDescriptor;

    /// Attaches a column family to a table descriptor
    fn add_column_family(&self, table: &mut TableDescriptor, family: ColumnFamilyDescriptor);

    fn set_compression(&self, family: &mut ColumnFamilyDescriptor, algorithm: Compression);

    /// Pins the timestamp used by a delete mutation
    fn set_delete_timestamp(&self, delete: &mut Delete, timestamp: i64) {
        delete.timestamp = Some(timestamp);
    }
}
