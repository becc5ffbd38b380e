use std::fmt;

/// One inventory record: a display name and a stock quantity.
///
/// The type itself is permissive. Name validation happens at the
/// [`Store`](crate::Store) boundary, and stock may be any integer,
/// including negative values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The display name of the item.
    pub name: String,
    /// The stock quantity.
    pub stock: i64,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, stock: i64) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Stock: {})", self.name, self.stock)
    }
}
