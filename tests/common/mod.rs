use std::{path::PathBuf, sync::Arc};

use axum::Router;
use renovation_api::{app::env::Envy, build_router, AppState};
use tempfile::TempDir;

pub struct TestApp {
    pub router: Router,
    pub upload_dir: PathBuf,
    pub output_file: PathBuf,
    _scratch: TempDir,
}

impl TestApp {
    pub fn spawn(stability_api_key: Option<&str>, stability_api_url: Option<&str>) -> Self {
        let scratch = TempDir::new().expect("failed to create scratch dir");
        let upload_dir = scratch.path().join("uploads");
        std::fs::create_dir_all(&upload_dir).expect("failed to create uploads dir");
        let output_file = scratch.path().join("output.png");

        let envy = Envy {
            port: None,
            stability_api_key: stability_api_key.map(str::to_string),
            stability_api_url: stability_api_url.map(str::to_string),
            upload_dir: Some(upload_dir.to_string_lossy().into_owned()),
            output_file: Some(output_file.to_string_lossy().into_owned()),
        };

        let router = build_router(AppState {
            envy: Arc::new(envy),
        });

        Self {
            router,
            upload_dir,
            output_file,
            _scratch: scratch,
        }
    }
}

pub const BOUNDARY: &str = "X-TEST-BOUNDARY";

/// Builds a raw multipart/form-data body with an optional `prompt` text field
/// and an optional `image` file field.
pub fn multipart_body(prompt: Option<&str>, image: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();

    if let Some(prompt) = prompt {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"prompt\"\r\n\r\n{prompt}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, data)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={BOUNDARY}"),
        body,
    )
}
