use std::sync::Arc;

use axum::{
    http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::app::env::Envy;

pub mod app;
pub mod generation;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT])
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/generate", post(generation::controller::generate_image))
        .layer(cors)
        .with_state(state)
}
