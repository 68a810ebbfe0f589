pub static API_URL: &str = "https://api.stability.ai";
pub static ENGINE_ID: &str = "stable-diffusion-xl-1024-v1-0";
