use axum::extract::Multipart;
use mime::Mime;
use uuid::Uuid;

use super::models::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct FormProperties {
    pub text_fields: Vec<(String, String)>,
    pub files: Vec<FileProperties>,
}

impl FormProperties {
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.text_fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, value)| value.as_str())
    }
}

pub async fn get_form_properties(mut multipart: Multipart) -> FormProperties {
    let mut properties = FormProperties::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or("file").to_string();

        if field.file_name().is_none() {
            if let Ok(text) = field.text().await {
                properties.text_fields.push((field_name, text));
            }
            continue;
        }

        let file_name = field.file_name().unwrap_or("file-name").to_string();
        let mime_type: Mime = field
            .content_type()
            .and_then(|content_type| content_type.parse().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let Ok(data) = field.bytes().await else {
            continue;
        };

        properties.files.push(FileProperties {
            id: Uuid::new_v4().to_string(),
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    properties
}
