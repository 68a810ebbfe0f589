use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: u8,
    pub height: u16,
    pub width: u16,
    pub samples: u8,
    pub steps: u8,
}

#[derive(Debug, Serialize)]
pub struct TextPrompt {
    pub text: String,
}
