use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StabilityGenerateImagesResponse {
    pub artifacts: Vec<StabilityArtifact>,
}

#[derive(Debug, Deserialize)]
pub struct StabilityArtifact {
    pub base64: String,
}
