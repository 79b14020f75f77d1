use serde::{Deserialize, Serialize};

// API Request/Response models
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    // A missing field and an empty string are the same thing to the
    // validation in the handler.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResult {
    pub patient: String,
    pub clinician: String,
    pub sources: Vec<String>,
    #[serde(rename = "modelInfo")]
    pub model_info: ModelInfo,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub architecture: String,
    /// Simulated inference latency in milliseconds.
    pub processing_time: u64,
    /// Simulated confidence as a whole percentage.
    pub confidence: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
