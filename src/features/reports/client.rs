use std::path::PathBuf;

use chrono::Utc;

use crate::core::config::ExportConfig;
use crate::core::error::{AppError, Result};
use crate::core::http::ApiClient;
use crate::features::reports::dtos::{FeedbackRequest, ReportDraft};
use crate::features::reports::models::Report;

/// Gateway operations for `/reports`.
pub struct ReportsApi {
    client: ApiClient,
    export_dir: PathBuf,
}

impl ReportsApi {
    pub fn new(client: ApiClient, export: &ExportConfig) -> Self {
        Self {
            client,
            export_dir: export.dir.clone(),
        }
    }

    /// Lists reports, server-filtered by the search term. The query parameter
    /// is omitted entirely for an empty term.
    pub async fn list(&self, search: &str) -> Result<Vec<Report>> {
        if search.is_empty() {
            self.client.get("/reports").await
        } else {
            self.client
                .get_with_query("/reports", &[("search", search)])
                .await
        }
    }

    pub async fn get(&self, id: &str) -> Result<Report> {
        self.client.get(&format!("/reports/{}", id)).await
    }

    pub async fn create(&self, draft: &ReportDraft) -> Result<serde_json::Value> {
        self.client.post("/reports", draft).await
    }

    /// Backend capability; no shell flow edits a submitted report.
    #[allow(dead_code)]
    pub async fn update(&self, id: &str, draft: &ReportDraft) -> Result<serde_json::Value> {
        self.client.put(&format!("/reports/{}", id), draft).await
    }

    /// Backend capability; this client never deletes reports.
    #[allow(dead_code)]
    pub async fn delete(&self, id: &str) -> Result<serde_json::Value> {
        self.client.delete(&format!("/reports/{}", id)).await
    }

    /// Attaches review feedback, moving the report to approved or rejected.
    pub async fn add_feedback(
        &self,
        id: &str,
        request: &FeedbackRequest,
    ) -> Result<serde_json::Value> {
        self.client
            .post(&format!("/reports/{}/feedback", id), request)
            .await
    }

    /// Fetches the spreadsheet export and writes it next to the configured
    /// export directory, named after the current date.
    pub async fn export_excel(&self) -> Result<PathBuf> {
        let bytes = self.client.download("/reports/export/excel").await?;

        std::fs::create_dir_all(&self.export_dir).map_err(|e| AppError::Storage(e.to_string()))?;
        let filename = format!("reports_{}.xlsx", Utc::now().format("%Y-%m-%d"));
        let path = self.export_dir.join(filename);
        std::fs::write(&path, bytes).map_err(|e| AppError::Storage(e.to_string()))?;

        tracing::info!("Exported reports to {}", path.display());
        Ok(path)
    }
}
