use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::classes::models::ClassInfo;

/// Gateway operations for `/classes`.
pub struct ClassesApi {
    client: ApiClient,
}

impl ClassesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ClassInfo>> {
        self.client.get("/classes").await
    }

    /// Backend capability; the classes page only lists.
    #[allow(dead_code)]
    pub async fn get(&self, id: &str) -> Result<ClassInfo> {
        self.client.get(&format!("/classes/{}", id)).await
    }
}
