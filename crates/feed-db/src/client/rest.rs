//! Backend client - one `reqwest::Client` plus the project keys

use std::fmt;
use std::sync::Arc;

use feed_common::BackendConfig;
use feed_core::Caller;
use reqwest::header::CONTENT_RANGE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::RestError;
use super::query::{parse_content_range_total, RestQuery};

/// `Prefer` value asking PostgREST to return affected rows
pub const RETURN_REPRESENTATION: &str = "return=representation";

/// `Prefer` value asking PostgREST for an exact `Content-Range` total
pub const COUNT_EXACT: &str = "count=exact";

/// Whose credentials a backend request runs with
#[derive(Clone, Copy)]
pub enum Credentials<'a> {
    /// Public key only; used for sign-up and password grants
    Anonymous,
    /// Service-role key; bypasses row-level security
    Service,
    /// The caller's access token; row-level security applies
    Caller(&'a Caller),
    /// A raw bearer token that has not been verified yet
    Bearer(&'a str),
}

/// Cheaply cloneable handle to the hosted backend
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: Client,
    base_url: String,
    anon_key: String,
    service_key: String,
}

/// Build the shared backend client from configuration
pub fn create_client(config: &BackendConfig) -> Result<BackendClient, reqwest::Error> {
    let http = Client::builder()
        .timeout(config.timeout())
        .connect_timeout(config.timeout())
        .build()?;

    Ok(BackendClient {
        inner: Arc::new(Inner {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            service_key: config.service_key.clone(),
        }),
    })
}

impl BackendClient {
    /// Request against a PostgREST table
    pub fn table(
        &self,
        method: Method,
        table: &str,
        query: &RestQuery,
        credentials: Credentials<'_>,
    ) -> RequestBuilder {
        let url = format!("{}/rest/v1/{table}", self.inner.base_url);
        let request = self.inner.http.request(method, url).query(query.params());
        self.authorize(request, credentials)
    }

    /// Request against an auth-service endpoint, e.g. `signup` or `user`
    pub fn auth(&self, method: Method, path: &str, credentials: Credentials<'_>) -> RequestBuilder {
        let url = format!("{}/auth/v1/{path}", self.inner.base_url);
        self.authorize(self.inner.http.request(method, url), credentials)
    }

    fn authorize(&self, request: RequestBuilder, credentials: Credentials<'_>) -> RequestBuilder {
        let (api_key, bearer) = match credentials {
            Credentials::Anonymous => (&self.inner.anon_key, self.inner.anon_key.as_str()),
            Credentials::Service => (&self.inner.service_key, self.inner.service_key.as_str()),
            Credentials::Caller(caller) => (&self.inner.anon_key, caller.access_token()),
            Credentials::Bearer(token) => (&self.inner.anon_key, token),
        };
        request.header("apikey", api_key).bearer_auth(bearer)
    }

    /// Send and decode a JSON body
    pub async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, RestError> {
        let response = Self::check(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send and read the row total from `Content-Range`
    pub async fn count(request: RequestBuilder) -> Result<u64, RestError> {
        let response = Self::check(request.header("Prefer", COUNT_EXACT).send().await?).await?;

        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| RestError::Unexpected("missing Content-Range total".to_string()))
    }

    /// Send and discard the body
    pub async fn execute(request: RequestBuilder) -> Result<(), RestError> {
        Self::check(request.send().await?).await?;
        Ok(())
    }

    async fn check(response: Response) -> Result<Response, RestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(RestError::from_body(status.as_u16(), &body))
    }
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
