use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationApiError {
    MissingPrompt,
    MissingApiKey,
    GenerationFailed,
}

impl GenerationApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingPrompt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Prompt is required".to_string(),
            },
            Self::MissingApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Stability API key not found in .env".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Stable Diffusion generation failed".to_string(),
            },
        }
    }
}
