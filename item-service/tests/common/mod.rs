#![allow(dead_code)]

use auth::JwtSettings;
use auth::TokenIssuer;
use auth::TokenSubject;
use chrono::DateTime;
use chrono::Utc;
use item_service::bootstrap::build_router;
use item_service::config::Config;
use item_service::config::DatabaseBackend;
use item_service::config::DatabaseConfig;
use item_service::config::JwtConfig;
use item_service::config::PasswordConfig;
use item_service::config::ServerConfig;
use serde_json::json;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const JWT_ISSUER: &str = "rastro-test";

/// Test application that spawns a real server on the in-memory backend
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let config = Config {
            server: ServerConfig { http_port: port },
            database: DatabaseConfig {
                backend: DatabaseBackend::Memory,
                url: String::new(),
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: JWT_SECRET.to_string(),
                issuer: JWT_ISSUER.to_string(),
                expiration_hours: 6,
            },
            // Lowest cost bcrypt accepts keeps the suite fast.
            password: PasswordConfig { bcrypt_cost: 4 },
        };

        let router = build_router(&config)
            .await
            .expect("Failed to build router");

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let token_issuer = TokenIssuer::new(&config.jwt.settings().unwrap());

        Self {
            address,
            port,
            api_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create reqwest client"),
            token_issuer,
        }
    }

    /// Issuer signing with a different key than the server's
    pub fn foreign_issuer(secret: &str, issuer: &str) -> TokenIssuer {
        TokenIssuer::new(&JwtSettings::new(secret, issuer).unwrap())
    }

    /// Sign a token for an arbitrary subject as if issued at `issued_at`
    pub fn token_issued_at(&self, user_id: &str, email: &str, issued_at: DateTime<Utc>) -> String {
        self.token_issuer
            .issue_at(&TokenSubject::new(user_id, email), issued_at)
            .unwrap()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the raw response
    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user, log in and return the access token
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let response = self.register(email, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self.login(email, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        response.text().await.expect("Failed to read response")
    }
}
