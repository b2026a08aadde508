// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod images;
pub mod users;

use crate::application::ports::storage::UploadedFile;
use crate::presentation::http::error::HttpError;
use axum::extract::{Multipart, multipart::Field};

/// Fields collected from a multipart upload: every file part under the
/// requested name plus any plain text fields.
#[derive(Debug, Default)]
pub(crate) struct MultipartUpload {
    pub files: Vec<UploadedFile>,
    pub texts: Vec<(String, String)>,
}

impl MultipartUpload {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

pub(crate) async fn read_multipart(
    mut multipart: Multipart,
    file_field: &str,
) -> Result<MultipartUpload, HttpError> {
    let mut upload = MultipartUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(format!("malformed multipart body: {err}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == file_field {
            upload.files.push(read_file(field).await?);
        } else {
            let value = field
                .text()
                .await
                .map_err(|err| HttpError::bad_request(format!("invalid field `{name}`: {err}")))?;
            upload.texts.push((name, value));
        }
    }

    Ok(upload)
}

async fn read_file(field: Field<'_>) -> Result<UploadedFile, HttpError> {
    let file_name = field.file_name().map(str::to_string);
    let contents = field
        .bytes()
        .await
        .map_err(|err| HttpError::bad_request(format!("failed to read upload: {err}")))?;
    Ok(UploadedFile {
        file_name,
        contents,
    })
}
