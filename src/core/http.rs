use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::modules::storage::KeyValueStore;
use crate::shared::constants::SESSION_TOKEN_KEY;

/// Fallback message when the backend reports failure without an error body.
const GENERIC_API_ERROR: &str = "API request failed";

/// Error body shape used by the backend on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Base client for the reporting backend.
///
/// Every request goes to a fixed base URL, carries a JSON body where
/// applicable, and attaches `Authorization: Bearer <token>` whenever a token
/// is present in the durable store. Responses are decoded as JSON; a
/// non-success status surfaces the server-supplied message as
/// [`AppError::Api`], while transport and decode failures surface as
/// [`AppError::Transport`] / [`AppError::Decode`].
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            store,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the bearer token from the durable store, if one is saved.
    fn bearer_token(&self) -> Option<String> {
        self.store.get(SESSION_TOKEN_KEY).ok().flatten()
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            AppError::Transport(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| GENERIC_API_ERROR.to_string());
            tracing::error!("API error: HTTP {} - {}", status, message);
            return Err(AppError::Api(message));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to decode response: {}", e);
            AppError::Decode(e.to_string())
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.http.get(self.url(path)).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.http.post(self.url(path)).json(body))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.delete(self.url(path))).await
    }

    /// Binary fetch used by the spreadsheet export. A non-success status maps
    /// to the fixed export failure; the body is never inspected.
    pub async fn download(&self, path: &str) -> Result<Vec<u8>> {
        let request = self.authorize(self.http.get(self.url(path)));
        let response = request.send().await.map_err(|e| {
            tracing::error!("Download failed: {}", e);
            AppError::Transport(e.to_string())
        })?;

        if !response.status().is_success() {
            tracing::error!("Export rejected: HTTP {}", response.status());
            return Err(AppError::ExportFailed);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Backend liveness probe (`GET /health`).
    pub async fn health(&self) -> Result<serde_json::Value> {
        self.get("/health").await
    }
}
