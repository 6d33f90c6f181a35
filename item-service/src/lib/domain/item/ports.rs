use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ReplaceItemCommand;

/// Port for item domain service operations.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// List every active item.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self) -> Result<Vec<Item>, ItemError>;

    /// Retrieve an active item by ID.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError>;

    /// Create a new active item.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_item(&self, command: CreateItemCommand) -> Result<Item, ItemError>;

    /// Replace the mutable fields of an active item.
    ///
    /// # Returns
    /// Updated item, with `created_at` unchanged
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn update_item(&self, command: ReplaceItemCommand) -> Result<Item, ItemError>;

    /// Soft delete an active item.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist or was already deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError>;
}

/// Persistence operations for items.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Retrieve all items with `is_active` set, oldest first.
    async fn list_active(&self) -> Result<Vec<Item>, ItemError>;

    /// Retrieve an item by ID, ignoring deleted ones.
    async fn find_active_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;

    /// Persist a new item.
    async fn create(&self, item: Item) -> Result<Item, ItemError>;

    /// Overwrite the stored item with the same ID.
    ///
    /// # Errors
    /// * `NotFound` - No active item with that ID
    /// * `DatabaseError` - Database operation failed
    async fn replace(&self, item: Item) -> Result<Item, ItemError>;

    /// Mark an active item as deleted.
    ///
    /// # Returns
    /// `false` when no active item matched
    async fn deactivate(&self, id: &ItemId, at: DateTime<Utc>) -> Result<bool, ItemError>;
}
