use std::{fmt, num::NonZeroUsize, str::FromStr};

use super::Item;

/// A 1-based position in the inventory's current order.
///
/// Positions are not stable identifiers: deleting an item shifts every later
/// item's position down by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(NonZeroUsize);

impl Position {
    /// Creates a position from a 1-based value. Returns `None` for zero.
    #[must_use]
    pub const fn new(value: usize) -> Option<Self> {
        match NonZeroUsize::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The 1-based value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based index into the underlying sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when text cannot be parsed as a [`Position`].
#[derive(Debug, thiserror::Error)]
#[error("not a valid 1-based position: {0:?}")]
pub struct PositionError(String);

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| PositionError(s.to_string()))
    }
}

/// The ordered collection of all [`Item`]s.
///
/// Insertion order is significant: it defines the user-visible 1-based
/// position of each item. There is no uniqueness constraint on names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item, returning the position it now occupies (the highest).
    pub fn push(&mut self, item: Item) -> Position {
        self.items.push(item);
        Position(NonZeroUsize::MIN.saturating_add(self.items.len() - 1))
    }

    /// Returns the item at the given position, if in range.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Item> {
        self.items.get(position.index())
    }

    /// Removes and returns the item at the given position, if in range.
    ///
    /// Every item at a later position shifts down by one.
    pub fn remove(&mut self, position: Position) -> Option<Item> {
        (position.index() < self.items.len()).then(|| self.items.remove(position.index()))
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates the items with their current 1-based positions.
    pub fn positions(&self) -> impl Iterator<Item = (Position, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (Position(NonZeroUsize::MIN.saturating_add(index)), item))
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Inventory {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
