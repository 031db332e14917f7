//! Multipart upload parsing
//!
//! Reads a multipart body in one pass. The file part is classified by its
//! declared content type before any byte is buffered and is capped chunk by
//! chunk; text parts are collected by name.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::application::upload::UploadedFile;
use crate::domain::value_object::media_type::MediaType;
use crate::error::{MediaError, MediaResult};

/// Parsed multipart body
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Text field value, empty when absent
    pub fn field(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }
}

/// Read every part, accepting a single file under `file_field`
pub async fn read_upload_form(
    mut multipart: Multipart,
    file_field: &str,
    max_file_bytes: usize,
) -> MediaResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        let Some(original_name) = field.file_name().map(str::to_string) else {
            let value = field.text().await?;
            form.fields.insert(name, value);
            continue;
        };

        if name != file_field {
            return Err(MediaError::Validation(format!("Unexpected field: {}", name)));
        }
        if form.file.is_some() {
            return Err(MediaError::Validation(
                "Only one file may be uploaded".to_string(),
            ));
        }

        let media_type = field
            .content_type()
            .and_then(MediaType::from_declared)
            .ok_or(MediaError::UnsupportedMediaType)?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if bytes.len() + chunk.len() > max_file_bytes {
                return Err(MediaError::PayloadTooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }

        form.file = Some(UploadedFile {
            media_type,
            original_name,
            bytes,
        });
    }

    Ok(form)
}
