use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::monitoring::models::ActivityEntry;

/// Gateway operations for `/monitoring`.
pub struct MonitoringApi {
    client: ApiClient,
}

impl MonitoringApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn activities(&self, limit: Option<i64>) -> Result<Vec<ActivityEntry>> {
        match limit {
            Some(limit) => {
                self.client
                    .get_with_query("/monitoring/activities", &[("limit", limit)])
                    .await
            }
            None => self.client.get("/monitoring/activities").await,
        }
    }

    pub async fn stats(&self) -> Result<serde_json::Value> {
        self.client.get("/monitoring/stats").await
    }
}
