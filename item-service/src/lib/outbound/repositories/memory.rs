//! In-process repositories backing the `memory` database backend.
//!
//! Contents live only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Users keyed by normalized email.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<EmailAddress, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_active(&self) -> Result<Vec<Item>, ItemError> {
        let mut items: Vec<Item> = self
            .items
            .read()
            .await
            .values()
            .filter(|item| item.is_active)
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });

        Ok(items)
    }

    async fn find_active_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        Ok(self
            .items
            .read()
            .await
            .get(id)
            .filter(|item| item.is_active)
            .cloned())
    }

    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn replace(&self, item: Item) -> Result<Item, ItemError> {
        let mut items = self.items.write().await;

        match items.get_mut(&item.id) {
            Some(stored) if stored.is_active => {
                *stored = item.clone();
                Ok(item)
            }
            _ => Err(ItemError::NotFound(item.id)),
        }
    }

    async fn deactivate(&self, id: &ItemId, at: DateTime<Utc>) -> Result<bool, ItemError> {
        let mut items = self.items.write().await;

        match items.get_mut(id) {
            Some(stored) if stored.is_active => {
                stored.is_active = false;
                stored.updated_at = at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::item::models::ItemName;
    use crate::domain::user::models::UserId;

    fn user(email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$2b$04$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn item(name: &str, created_at: DateTime<Utc>) -> Item {
        Item {
            id: ItemId::new(),
            name: ItemName::new(name.to_string()).unwrap(),
            description: None,
            category: String::new(),
            is_active: true,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_user_lookup_is_case_insensitive() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("a@b.com")).await.unwrap();

        let found = repository
            .find_by_email(&EmailAddress::new("A@B.COM".to_string()).unwrap())
            .await
            .unwrap()
            .expect("User not found");
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repository = InMemoryUserRepository::new();
        repository.create(user("a@b.com")).await.unwrap();

        let result = repository.create(user("a@b.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_deactivated_items_are_hidden() {
        let repository = InMemoryItemRepository::new();
        let now = Utc::now();
        let first = repository
            .create(item("First", now - Duration::minutes(2)))
            .await
            .unwrap();
        let second = repository
            .create(item("Second", now - Duration::minutes(1)))
            .await
            .unwrap();

        assert!(repository.deactivate(&first.id, now).await.unwrap());
        assert!(!repository.deactivate(&first.id, now).await.unwrap());

        let listed = repository.list_active().await.unwrap();
        assert_eq!(listed, vec![second]);
        assert!(repository
            .find_active_by_id(&first.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_replace_requires_active_item() {
        let repository = InMemoryItemRepository::new();
        let stored = repository.create(item("Lamp", Utc::now())).await.unwrap();
        repository.deactivate(&stored.id, Utc::now()).await.unwrap();

        let result = repository.replace(stored).await;
        assert!(matches!(result.unwrap_err(), ItemError::NotFound(_)));
    }
}
