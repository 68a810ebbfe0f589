use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub success: bool,
    pub message: String,
    pub file: String,
}
