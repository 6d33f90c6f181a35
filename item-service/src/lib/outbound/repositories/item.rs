use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::ports::ItemRepository;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    category: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = ItemError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            id: ItemId(row.id),
            name: ItemName::new(row.name)?,
            description: row.description,
            category: row.category,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> ItemError {
    ItemError::DatabaseError(e.to_string())
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn list_active(&self) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, category, is_active, created_at, updated_at
            FROM items
            WHERE is_active
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Item::try_from).collect()
    }

    async fn find_active_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, category, is_active, created_at, updated_at
            FROM items
            WHERE id = $1 AND is_active
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Item::try_from).transpose()
    }

    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, description, category, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(item.description.as_deref())
        .bind(&item.category)
        .bind(item.is_active)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(item)
    }

    async fn replace(&self, item: Item) -> Result<Item, ItemError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, description = $3, category = $4, is_active = $5,
                created_at = $6, updated_at = $7
            WHERE id = $1 AND is_active
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(item.description.as_deref())
        .bind(&item.category)
        .bind(item.is_active)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(item.id));
        }

        Ok(item)
    }

    async fn deactivate(&self, id: &ItemId, at: DateTime<Utc>) -> Result<bool, ItemError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET is_active = FALSE, updated_at = $2
            WHERE id = $1 AND is_active
            "#,
        )
        .bind(id.0)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
