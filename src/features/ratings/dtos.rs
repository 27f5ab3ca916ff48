use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub report_id: String,
    pub rating: u8,
    pub comment: String,
}
