//! Built-in compat layers, one per supported HBase release line
use hbase_compat_core::{
    ColumnFamilyDescriptor, Compression, DescriptorApi, StorageCompat, TableDescriptor,
};

/// Closed set of layers shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCompat {
    V0_98,
    V1_0,
    V1_1,
    V1_2,
    V1_3,
}

impl BuiltinCompat {
    pub const ALL: [BuiltinCompat; 5] = [
        BuiltinCompat::V0_98,
        BuiltinCompat::V1_0,
        BuiltinCompat::V1_1,
        BuiltinCompat::V1_2,
        BuiltinCompat::V1_3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::V0_98 => "HBaseCompat0_98",
            Self::V1_0 => "HBaseCompat1_0",
            Self::V1_1 => "HBaseCompat1_1",
            Self::V1_2 => "HBaseCompat1_2",
            Self::V1_3 => "HBaseCompat1_3",
        }
    }

    pub fn line(self) -> &'static str {
        match self {
            Self::V0_98 => "0.98",
            Self::V1_0 => "1.0",
            Self::V1_1 => "1.1",
            Self::V1_2 => "1.2",
            Self::V1_3 => "1.3",
        }
    }

    pub fn descriptor_api(self) -> DescriptorApi {
        match self {
            Self::V0_98 | Self::V1_0 => DescriptorApi::Legacy,
            Self::V1_1 | Self::V1_2 | Self::V1_3 => DescriptorApi::Builder,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HBaseCompat {
    variant: BuiltinCompat,
}

impl HBaseCompat {
    pub fn new(variant: BuiltinCompat) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> BuiltinCompat {
        self.variant
    }
}

impl StorageCompat for HBaseCompat {
    fn name(&self) -> &'static str {
        self.variant.name()
    }

    fn hbase_line(&self) -> &'static str {
        self.variant.line()
    }

    fn new_table_descriptor(&self, table: &str) -> TableDescriptor {
        TableDescriptor {
            table: table.to_string(),
            api: self.variant.descriptor_api(),
            families: Vec::new(),
        }
    }

    fn add_column_family(&self, table: &mut TableDescriptor, mut family: ColumnFamilyDescriptor) {
        family.api = Some(self.variant.descriptor_api());
        match table.families.iter_mut().find(|f| f.name == family.name) {
            // Legacy descriptors overwrite in place; builders rebuild the family
            Some(existing) => *existing = family,
            None => table.families.push(family),
        }
    }

    fn set_compression(&self, family: &mut ColumnFamilyDescriptor, algorithm: Compression) {
        family.compression = algorithm;
        family.api = Some(self.variant.descriptor_api());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbase_compat_core::Delete;

    #[test]
    fn test_from_name_round_trip() {
        for variant in BuiltinCompat::ALL {
            assert_eq!(BuiltinCompat::from_name(variant.name()), Some(variant));
        }
        assert_eq!(BuiltinCompat::from_name("HBaseCompat2_0"), None);
    }

    #[test]
    fn test_descriptor_api_split() {
        let legacy = HBaseCompat::new(BuiltinCompat::V0_98);
        let builder = HBaseCompat::new(BuiltinCompat::V1_1);

        assert_eq!(legacy.new_table_descriptor("t").api, DescriptorApi::Legacy);
        assert_eq!(builder.new_table_descriptor("t").api, DescriptorApi::Builder);
    }

    #[test]
    fn test_add_column_family_replaces_same_name() {
        let compat = HBaseCompat::new(BuiltinCompat::V1_2);
        let mut table = compat.new_table_descriptor("janusgraph");

        compat.add_column_family(&mut table, ColumnFamilyDescriptor::new("e"));
        let mut family = ColumnFamilyDescriptor::new("e");
        compat.set_compression(&mut family, Compression::Snappy);
        compat.add_column_family(&mut table, family);

        assert_eq!(table.families.len(), 1);
        let e = table.family("e").unwrap();
        assert_eq!(e.compression, Compression::Snappy);
        assert_eq!(e.api, Some(DescriptorApi::Builder));
    }

    #[test]
    fn test_delete_timestamp() {
        let compat = HBaseCompat::new(BuiltinCompat::V1_0);
        let mut delete = Delete::new(b"row-1".to_vec());
        compat.set_delete_timestamp(&mut delete, 42);
        assert_eq!(delete.timestamp, Some(42));
    }
}
