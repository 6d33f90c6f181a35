//! Composition root: builds adapters and services from configuration and
//! wires them into the HTTP router.

use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use auth::PasswordHasher;
use axum::Router;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::config::DatabaseBackend;
use crate::domain::authentication::service::AuthService;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::service::ItemService;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::UserService;
use crate::inbound::http::router::create_router;
use crate::outbound::repositories::InMemoryItemRepository;
use crate::outbound::repositories::InMemoryUserRepository;
use crate::outbound::repositories::PostgresItemRepository;
use crate::outbound::repositories::PostgresUserRepository;

/// Build the application router for the configured database backend.
///
/// # Errors
/// Fails on invalid signing settings, an unusable bcrypt cost, or when the
/// Postgres pool or its migrations cannot be brought up.
pub async fn build_router(config: &Config) -> anyhow::Result<Router> {
    let settings = config
        .jwt
        .settings()
        .context("Invalid JWT configuration")?;
    let password_hasher = PasswordHasher::with_cost(config.password.bcrypt_cost)
        .context("Invalid password configuration")?;
    let authenticator =
        Arc::new(Authenticator::new(&settings).with_password_hasher(password_hasher));

    match config.database.backend {
        DatabaseBackend::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations")
                .run(&pg_pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            Ok(wire(
                Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                Arc::new(PostgresItemRepository::new(pg_pool)),
                authenticator,
            ))
        }
        DatabaseBackend::Memory => {
            tracing::warn!(database = "memory", "Using in-memory storage; data is not persisted");

            Ok(wire(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryItemRepository::new()),
                authenticator,
            ))
        }
    }
}

fn wire<UR, IR>(
    user_repository: Arc<UR>,
    item_repository: Arc<IR>,
    authenticator: Arc<Authenticator>,
) -> Router
where
    UR: UserRepository,
    IR: ItemRepository,
{
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&authenticator),
    ));
    let auth_service = Arc::new(AuthService::new(user_repository, authenticator));
    let item_service = Arc::new(ItemService::new(item_repository));

    create_router(user_service, auth_service, item_service)
}
