use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::item::errors::ItemIdError;
use crate::domain::item::errors::ItemNameError;

/// Catalogue item. Deleting an item only clears `is_active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub description: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an item ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        Uuid::parse_str(s)
            .map(ItemId)
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated item name. Surrounding whitespace is dropped.
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name exceeds 200 characters
    pub fn new(name: String) -> Result<Self, ItemNameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            return Err(ItemNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(ItemNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Mutable fields of an item, shared by create and full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: ItemName,
    pub description: Option<String>,
    pub category: String,
}

/// Command to create a new item
#[derive(Debug, Clone)]
pub struct CreateItemCommand {
    pub fields: ItemFields,
}

impl CreateItemCommand {
    pub fn new(fields: ItemFields) -> Self {
        Self { fields }
    }
}

/// Command to replace the mutable fields of an existing item
#[derive(Debug, Clone)]
pub struct ReplaceItemCommand {
    pub id: ItemId,
    pub fields: ItemFields,
}

impl ReplaceItemCommand {
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self { id, fields }
    }
}
