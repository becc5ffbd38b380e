//! A flat-file backed store of inventory items.
//!
//! The [`Store`] is the sole owner of the in-memory [`Inventory`] and the
//! persisted file for its lifetime. Every operation on the inventory passes
//! through it.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use super::json::{self, LoadError, SaveError};
use crate::domain::{Inventory, Item, Position};

/// A flat-file backed store of inventory items.
///
/// Every successful mutation overwrites the persisted file in full before
/// returning. Validation failures never mutate the inventory and never touch
/// the file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    inventory: Inventory,
}

impl Store {
    /// Opens the store, loading the inventory persisted at `path`.
    ///
    /// A missing file is not an error: the store starts empty and the file
    /// is created by the first successful mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if its
    /// contents are not a valid inventory document. Neither case leaves a
    /// usable store: the caller should treat both as unrecoverable.
    pub fn open(path: PathBuf) -> Result<Self, LoadError> {
        let inventory = match File::open(&path) {
            Ok(file) => json::read(&mut BufReader::new(file))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no inventory file at {}, starting empty", path.display());
                Inventory::default()
            }
            Err(e) => return Err(LoadError::Io(e)),
        };

        debug!(items = inventory.len(), "loaded inventory");
        Ok(Self { path, inventory })
    }

    /// The path of the persisted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current items in display order. Read-only, no side effects.
    #[must_use]
    pub fn snapshot(&self) -> &[Item] {
        self.inventory.items()
    }

    /// Serializes the entire inventory and overwrites the persisted file.
    ///
    /// There is no atomic-replace step: an interrupted write can leave the
    /// file truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    pub fn save(&self) -> Result<(), SaveError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        json::write(&mut writer, &self.inventory)?;
        writer.flush()?;
        Ok(())
    }

    /// Validates untrusted text input, appends a new item at the end of the
    /// inventory, and saves.
    ///
    /// Returns the 1-based position the new item occupies.
    ///
    /// # Errors
    ///
    /// - [`AddError::MissingFields`] if `name` or `stock` is empty; nothing
    ///   is mutated or written.
    /// - [`AddError::InvalidStock`] if `stock` is not a valid integer;
    ///   nothing is mutated or written.
    /// - [`AddError::Save`] if the updated inventory cannot be persisted.
    pub fn add(&mut self, name: &str, stock: &str) -> Result<Position, AddError> {
        if name.is_empty() || stock.is_empty() {
            return Err(AddError::MissingFields);
        }

        let stock: i64 = stock.parse().map_err(AddError::InvalidStock)?;

        let position = self.inventory.push(Item::new(name, stock));
        self.save()?;
        Ok(position)
    }

    /// Validates untrusted text input and removes the item at the given
    /// 1-based position, then saves.
    ///
    /// Every item at a later position shifts down by one.
    ///
    /// # Errors
    ///
    /// - [`DeleteError::MissingId`] if `id` is empty.
    /// - [`DeleteError::InvalidId`] if `id` is not an integer or is out of
    ///   range for the current inventory.
    /// - [`DeleteError::Save`] if the updated inventory cannot be persisted.
    ///
    /// On a validation error the inventory is left unchanged and nothing is
    /// written.
    pub fn delete_by_position(&mut self, id: &str) -> Result<Item, DeleteError> {
        if id.is_empty() {
            return Err(DeleteError::MissingId);
        }

        let position: Position = id
            .parse()
            .map_err(|_| DeleteError::InvalidId(id.to_string()))?;

        let item = self
            .inventory
            .remove(position)
            .ok_or_else(|| DeleteError::InvalidId(id.to_string()))?;

        self.save()?;
        Ok(item)
    }
}

/// Errors returned by [`Store::add`].
#[derive(Debug, thiserror::Error)]
pub enum AddError {
    /// The name or stock field was left empty.
    #[error("both name and stock are required")]
    MissingFields,
    /// The stock text is not a valid integer.
    #[error("invalid stock value")]
    InvalidStock(#[source] std::num::ParseIntError),
    /// The updated inventory could not be persisted.
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Errors returned by [`Store::delete_by_position`].
#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    /// No item ID was provided.
    #[error("an item ID is required")]
    MissingId,
    /// The ID is not an integer, or is out of range.
    #[error("invalid item ID {0:?}")]
    InvalidId(String),
    /// The updated inventory could not be persisted.
    #[error(transparent)]
    Save(#[from] SaveError),
}
