//! Test helpers for integration tests
//!
//! Spawns the API on a random local port in front of an [`InMemoryBackend`]
//! and wraps the HTTP calls the tests make.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use feed_api::{create_app, AppState};
use feed_common::{AppConfig, TokenVerifier};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::backend::InMemoryBackend;
use crate::fixtures::ErrorEnvelope;

/// Secret used when a test server verifies tokens locally
pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret-0123456789";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub backend: InMemoryBackend,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose tokens are checked by the auth backend
    pub async fn start() -> Result<Self> {
        let backend = InMemoryBackend::new();
        let context = backend.service_context();
        Self::start_with(backend, context, test_config(&[])?).await
    }

    /// Start a server that verifies tokens with [`TEST_JWT_SECRET`]
    pub async fn start_with_local_verification() -> Result<Self> {
        let backend = InMemoryBackend::new();
        let context = backend
            .context_builder()
            .token_verifier(Arc::new(TokenVerifier::new(TEST_JWT_SECRET)))
            .build()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        let config = test_config(&[("SUPABASE_JWT_SECRET", TEST_JWT_SECRET)])?;
        Self::start_with(backend, context, config).await
    }

    /// Start a server with extra configuration variables
    pub async fn start_with_config(vars: &[(&str, &str)]) -> Result<Self> {
        let backend = InMemoryBackend::new();
        let context = backend.service_context();
        Self::start_with(backend, context, test_config(vars)?).await
    }

    async fn start_with(
        backend: InMemoryBackend,
        context: feed_service::ServiceContext,
        config: AppConfig,
    ) -> Result<Self> {
        let app = create_app(AppState::new(context, config))?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            backend,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {token}"))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize + ?Sized>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        let request = Self::authorized(self.client.post(self.url(path)), token);
        Ok(request.json(body).send().await?)
    }

    /// Make a POST request with an arbitrary Authorization header value
    pub async fn post_with_header<T: Serialize + ?Sized>(
        &self,
        path: &str,
        authorization: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Authorization", authorization)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with a raw, possibly malformed, JSON body
    pub async fn post_raw_auth(&self, path: &str, token: &str, body: &'static str) -> Result<Response> {
        let request = Self::authorized(self.client.post(self.url(path)), token);
        Ok(request
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token and no body
    pub async fn put_auth(&self, path: &str, token: &str) -> Result<Response> {
        let request = Self::authorized(self.client.put(self.url(path)), token);
        Ok(request.send().await?)
    }

    /// Make a PUT request without auth
    pub async fn put(&self, path: &str) -> Result<Response> {
        Ok(self.client.put(self.url(path)).send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let request = Self::authorized(self.client.delete(self.url(path)), token);
        Ok(request.send().await?)
    }

    /// Make a DELETE request without auth
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }
}

/// Configuration for a test server; the backend URL is never contacted
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = [
        ("API_PORT", "0"),
        ("SUPABASE_URL", "http://127.0.0.1:9"),
        ("SUPABASE_ANON_KEY", "test-anon-key"),
        ("SUPABASE_SERVICE_KEY", "test-service-key"),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "1000"),
        ("REQUEST_TIMEOUT_SECS", "5"),
    ]
    .iter()
    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
    .collect();

    for (key, value) in overrides {
        vars.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned()).map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error status and return the error envelope
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<ErrorEnvelope> {
    assert_json(response, expected_status).await
}
