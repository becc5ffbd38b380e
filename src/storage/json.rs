//! The persisted representation of the inventory.
//!
//! The inventory serializes as a JSON array of `{name, value}` records in
//! display order. The stock quantity is stored under the key `value`; that
//! exact field name is part of the on-disk compatibility contract.

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};

use crate::domain::{Inventory, Item};

/// One persisted inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ItemRecord {
    name: String,
    value: i64,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            value: item.stock,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            name: record.name,
            stock: record.value,
        }
    }
}

/// Reads a full inventory document from `reader`.
pub(crate) fn read<R: Read>(reader: &mut R) -> Result<Inventory, LoadError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let records: Vec<ItemRecord> = serde_json::from_str(&contents)?;
    Ok(records.into_iter().map(Item::from).collect())
}

/// Writes the full inventory document to `writer`, human-readable.
pub(crate) fn write<W: Write>(writer: &mut W, inventory: &Inventory) -> Result<(), SaveError> {
    let records: Vec<ItemRecord> = inventory.items().iter().map(ItemRecord::from).collect();
    serde_json::to_writer_pretty(&mut *writer, &records)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Errors that can occur when loading the persisted inventory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read inventory file")]
    Io(#[from] io::Error),
    /// The file contents are not a valid inventory document.
    #[error("malformed inventory file")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that can occur when writing the persisted inventory.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The file could not be written.
    #[error("failed to write inventory file")]
    Io(#[from] io::Error),
    /// The inventory could not be serialized.
    #[error("failed to serialize inventory")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const DOCUMENT: &str = r#"[
  {
    "name": "Widget",
    "value": 5
  },
  {
    "name": "Bolt",
    "value": -2
  }
]
"#;

    #[test]
    fn document_round_trip() {
        let mut reader = Cursor::new(DOCUMENT);
        let inventory = read(&mut reader).unwrap();

        let pairs: Vec<(&str, i64)> = inventory
            .items()
            .iter()
            .map(|item| (item.name.as_str(), item.stock))
            .collect();
        assert_eq!(pairs, [("Widget", 5), ("Bolt", -2)]);

        let mut bytes: Vec<u8> = vec![];
        write(&mut bytes, &inventory).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), DOCUMENT);
    }

    #[test]
    fn stock_serializes_under_the_value_key() {
        let inventory: Inventory = [Item::new("Widget", 5)].into_iter().collect();

        let mut bytes: Vec<u8> = vec![];
        write(&mut bytes, &inventory).unwrap();

        let output = String::from_utf8(bytes).unwrap();
        assert!(output.contains("\"value\": 5"));
        assert!(!output.contains("\"stock\""));
    }

    #[test]
    fn empty_array_is_an_empty_inventory() {
        let mut reader = Cursor::new("[]\n");
        let inventory = read(&mut reader).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let mut reader = Cursor::new("not json at all");
        assert!(matches!(read(&mut reader), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn record_with_missing_field_is_an_error() {
        let mut reader = Cursor::new(r#"[{"name": "Widget"}]"#);
        assert!(matches!(read(&mut reader), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn order_is_preserved() {
        let mut reader = Cursor::new(r#"[{"name":"B","value":2},{"name":"A","value":1}]"#);
        let inventory = read(&mut reader).unwrap();
        assert_eq!(inventory.items()[0].name, "B");
        assert_eq!(inventory.items()[1].name, "A");
    }
}
