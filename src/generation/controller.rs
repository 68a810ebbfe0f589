use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::{app::models::api_error::ApiError, AppState};

use super::{models::generate_image_response::GenerateImageResponse, service};

pub async fn generate_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    match service::generate_image(multipart, &state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
