use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemFields;
use crate::domain::item::models::ItemName;

pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod list_items;
pub mod update_item;

pub use create_item::create_item;
pub use delete_item::delete_item;
pub use get_item::get_item;
pub use list_items::list_items;
pub use update_item::update_item;

/// HTTP request body shared by create and full replace (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRequestBody {
    name: String,
    description: Option<String>,
    #[serde(default)]
    category: String,
}

impl ItemRequestBody {
    fn try_into_fields(self) -> Result<ItemFields, ItemError> {
        Ok(ItemFields {
            name: ItemName::new(self.name)?,
            description: self.description,
            category: self.category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponseData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Item> for ItemResponseData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.as_str().to_string(),
            description: item.description.clone(),
            category: item.category.clone(),
            is_active: item.is_active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
