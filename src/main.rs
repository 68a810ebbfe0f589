use std::{env, net::SocketAddr, sync::Arc};

use renovation_api::{app::env::Envy, build_router, AppState};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(5000);

    let upload_dir = envy.upload_dir();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .expect("failed to create uploads directory");

    let state = AppState {
        envy: Arc::new(envy),
    };

    // app
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
