//! Flat-file Inventory Tracking
//!
//! An inventory is an ordered list of named stock items, identified by their
//! 1-based position in the list. The whole list is persisted to a single
//! JSON file, rewritten in full on every mutation.

pub mod domain;
pub use domain::{Config, Inventory, Item, Position, PositionError};

/// Flat-file persistence for the inventory.
pub mod storage;
pub use storage::{AddError, DeleteError, LoadError, SaveError, Store};
