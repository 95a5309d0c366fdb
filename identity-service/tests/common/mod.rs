use std::sync::Arc;

use auth::TokenCodec;
use auth::TokenConfig;
use identity_service::identity::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::directory::InMemoryCredentialDirectory;
use serde_json::json;

/// Test application that spawns a real server on a random port, backed by
/// a fresh in-memory credential directory.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
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

        let config = TokenConfig::new("test-secret-key-for-jwt-signing-at-least-32-bytes");
        let codec = Arc::new(TokenCodec::new(config).expect("Failed to build codec"));
        let directory = Arc::new(InMemoryCredentialDirectory::new());
        let auth_service = Arc::new(AuthService::new(directory, codec));

        let router = create_router(auth_service, "http://localhost:3000");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Register a principal through the API.
    pub async fn register_user(&self, username: &str, email: &str, password: &str) {
        let response = self
            .post("/api/users")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log in and return the response body.
    pub async fn login(&self, username: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to parse response")
    }
}
