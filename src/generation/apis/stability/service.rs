use reqwest::{header, Response};

use crate::{
    app::{env::Envy, models::api_error::ApiError},
    generation::{dtos::generate_image_dto::GenerateImageDto, errors::GenerationApiError},
};

use super::{
    config::{API_URL, ENGINE_ID},
    models::input_spec::{InputSpec, TextPrompt},
    structs::stability_generate_images_response::StabilityGenerateImagesResponse,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    api_key: &str,
    envy: &Envy,
) -> Result<Vec<u8>, ApiError> {
    let input_spec = provide_input_spec(dto);

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert("Accept", "application/json".parse().unwrap());
    headers.insert(
        "Authorization",
        ["Bearer ", api_key].concat().parse().unwrap(),
    );

    let base_url = envy.stability_api_url.as_deref().unwrap_or(API_URL);

    let client = reqwest::Client::new();
    let url = format!("{}/v1/generation/{}/text-to-image", base_url, ENGINE_ID);
    let result = client
        .post(url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => parse_response_to_image_bytes(res).await,
        Err(e) => {
            tracing::error!(%e);
            Err(GenerationApiError::GenerationFailed.value())
        }
    }
}

fn provide_input_spec(dto: &GenerateImageDto) -> InputSpec {
    InputSpec {
        text_prompts: vec![TextPrompt {
            text: dto.prompt.to_string(),
        }],
        cfg_scale: 7,
        height: 1024,
        width: 1024,
        samples: 1,
        steps: 30,
    }
}

async fn parse_response_to_image_bytes(res: Response) -> Result<Vec<u8>, ApiError> {
    let status = res.status();

    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        tracing::error!(%status, %text);
        return Err(GenerationApiError::GenerationFailed.value());
    }

    match res.text().await {
        Ok(text) => match serde_json::from_str::<StabilityGenerateImagesResponse>(&text) {
            Ok(stability_response) => {
                let Some(artifact) = stability_response.artifacts.first()
                else {
                    tracing::error!("response contained no artifacts");
                    return Err(GenerationApiError::GenerationFailed.value());
                };

                match base64::decode(&artifact.base64) {
                    Ok(bytes) => Ok(bytes),
                    Err(e) => {
                        tracing::error!(%e);
                        Err(GenerationApiError::GenerationFailed.value())
                    }
                }
            }
            Err(_) => {
                tracing::error!(%text);
                Err(GenerationApiError::GenerationFailed.value())
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(GenerationApiError::GenerationFailed.value())
        }
    }
}
