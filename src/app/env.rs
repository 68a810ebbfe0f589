use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub stability_api_key: Option<String>,
    pub stability_api_url: Option<String>,

    pub upload_dir: Option<String>,
    pub output_file: Option<String>,
}

impl Envy {
    pub fn upload_dir(&self) -> String {
        match &self.upload_dir {
            Some(upload_dir) => upload_dir.to_string(),
            None => "uploads".to_string(),
        }
    }

    pub fn output_file(&self) -> String {
        match &self.output_file {
            Some(output_file) => output_file.to_string(),
            None => "output.png".to_string(),
        }
    }
}
