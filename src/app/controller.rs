pub async fn get_root() -> &'static str {
    "Renovation AI Backend is running (Stable Diffusion)"
}
