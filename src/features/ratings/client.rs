use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::ratings::dtos::SubmitRatingRequest;
use crate::features::ratings::models::Rating;

/// Gateway operations for `/ratings`.
pub struct RatingsApi {
    client: ApiClient,
}

impl RatingsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn submit(&self, request: &SubmitRatingRequest) -> Result<serde_json::Value> {
        self.client.post("/ratings", request).await
    }

    pub async fn list(&self) -> Result<Vec<Rating>> {
        self.client.get("/ratings").await
    }

    pub async fn for_report(&self, report_id: &str) -> Result<Vec<Rating>> {
        self.client.get(&format!("/ratings/{}", report_id)).await
    }

    /// Server-computed mean for one report. The response shape is not pinned
    /// down, so the value is pulled out of the usual field names and absence
    /// is reported as `None` rather than an error.
    pub async fn average(&self, report_id: &str) -> Result<Option<f64>> {
        let value: serde_json::Value = self
            .client
            .get(&format!("/ratings/{}/average", report_id))
            .await?;

        Ok(value
            .get("average")
            .or_else(|| value.get("averageRating"))
            .and_then(serde_json::Value::as_f64))
    }
}
