use axum::extract::Multipart;
use validator::Validate;

use crate::{
    app::{
        self,
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::multipart::{models::file_properties::FileProperties, multipart},
    },
    AppState,
};

use super::{
    apis::stability, dtos::generate_image_dto::GenerateImageDto, errors::GenerationApiError,
    models::generate_image_response::GenerateImageResponse,
};

pub async fn generate_image(
    multipart: Multipart,
    state: &AppState,
) -> Result<GenerateImageResponse, ApiError> {
    let form = multipart::get_form_properties(multipart).await;

    // uploads are persisted regardless of generation outcome
    save_uploaded_files(&form.files, state).await;

    let dto = GenerateImageDto {
        prompt: form.text_field("prompt").unwrap_or_default().to_string(),
    }
    .sanitized();

    if dto.validate().is_err() {
        return Err(GenerationApiError::MissingPrompt.value());
    }

    let Some(api_key) = state.envy.stability_api_key.as_deref()
    else {
        return Err(GenerationApiError::MissingApiKey.value());
    };

    match stability::service::generate_image(&dto, api_key, &state.envy).await {
        Ok(bytes) => {
            let output_file = state.envy.output_file();

            match tokio::fs::write(&output_file, &bytes).await {
                Ok(_) => Ok(GenerateImageResponse {
                    success: true,
                    message: "Image generated and saved successfully".to_string(),
                    file: output_file,
                }),
                Err(e) => {
                    tracing::error!(%e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => Err(e),
    }
}

async fn save_uploaded_files(files: &[FileProperties], state: &AppState) {
    let upload_dir = state.envy.upload_dir();

    for file in files {
        let file_name = [
            app::util::time::current_time_in_millis().to_string().as_str(),
            "-",
            &file.file_name,
        ]
        .concat();
        let path = [upload_dir.as_str(), "/", &file_name].concat();

        if let Err(e) = tokio::fs::write(&path, &file.data).await {
            tracing::error!(%e);
        }
    }
}
