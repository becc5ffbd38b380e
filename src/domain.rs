//! Core data model for the inventory.

mod config;
mod inventory;
mod item;

pub use config::Config;
pub use inventory::{Inventory, Position, PositionError};
pub use item::Item;
