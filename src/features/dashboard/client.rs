use crate::core::error::Result;
use crate::core::http::ApiClient;

/// Gateway operations for `/dashboard`.
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Server-side dashboard stats. The page itself derives its cards from
    /// the loaded reports; this endpoint backs the diagnostic stats command.
    pub async fn stats(&self) -> Result<serde_json::Value> {
        self.client.get("/dashboard/stats").await
    }

    pub async fn health(&self) -> Result<serde_json::Value> {
        self.client.health().await
    }
}
