use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ReplaceItemCommand;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;

/// Domain service implementation for item operations.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        self.repository.list_active().await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError> {
        self.repository
            .find_active_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(*id))
    }

    async fn create_item(&self, command: CreateItemCommand) -> Result<Item, ItemError> {
        let now = Utc::now();
        let item = Item {
            id: ItemId::new(),
            name: command.fields.name,
            description: command.fields.description,
            category: command.fields.category,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(item).await?;
        tracing::info!(item_id = %created.id, "Item created");

        Ok(created)
    }

    async fn update_item(&self, command: ReplaceItemCommand) -> Result<Item, ItemError> {
        let existing = self.get_item(&command.id).await?;

        let item = Item {
            id: existing.id,
            name: command.fields.name,
            description: command.fields.description,
            category: command.fields.category,
            is_active: true,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        let updated = self.repository.replace(item).await?;
        tracing::info!(item_id = %updated.id, "Item updated");

        Ok(updated)
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError> {
        if !self.repository.deactivate(id, Utc::now()).await? {
            return Err(ItemError::NotFound(*id));
        }

        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }
}
