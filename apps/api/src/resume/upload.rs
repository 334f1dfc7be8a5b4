//! Multipart résumé uploads: reads the form, validates the file name and
//! parses the document on the blocking pool from a temporary file.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::resume::text_extractor::{extension_of, is_allowed_extension, ALLOWED_EXTENSIONS};
use crate::resume::ResumeParser;

/// Form field carrying the document.
pub const RESUME_FIELD: &str = "resume";

/// A validated upload: the document bytes plus every other text field of
/// the form.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    extension: String,
    bytes: Bytes,
    pub fields: HashMap<String, String>,
}

impl ResumeUpload {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut document: Option<(String, Bytes)> = None;
        let mut fields = HashMap::new();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if name == RESUME_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                document = Some((file_name, field.bytes().await?));
            } else {
                fields.insert(name, field.text().await?);
            }
        }

        let (file_name, bytes) = document
            .ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
        if file_name.trim().is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        let extension = extension_of(Path::new(&file_name))
            .filter(|_| is_allowed_extension(Path::new(&file_name)))
            .ok_or_else(|| {
                AppError::UnsupportedFileType(format!(
                    "'{file_name}' is not supported; upload one of: {}",
                    ALLOWED_EXTENSIONS.join(", ")
                ))
            })?;

        debug!(file_name = %file_name, size = bytes.len(), "Resume upload received");
        Ok(ResumeUpload {
            file_name,
            extension,
            bytes,
            fields,
        })
    }

    #[cfg(test)]
    pub fn for_tests(fields: HashMap<String, String>) -> Self {
        ResumeUpload {
            file_name: "resume.txt".to_string(),
            extension: "txt".to_string(),
            bytes: Bytes::new(),
            fields,
        }
    }

    /// Non-blank value of a text field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Writes the document to a temporary file keeping its extension and runs
    /// `parse` on it off the async runtime. The file is removed afterwards.
    pub async fn parse<T, F>(&self, parser: Arc<ResumeParser>, parse: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&ResumeParser, &Path) -> T + Send + 'static,
    {
        let bytes = self.bytes.clone();
        let suffix = format!(".{}", self.extension);

        let result = tokio::task::spawn_blocking(move || -> anyhow::Result<T> {
            let mut file = tempfile::Builder::new()
                .prefix("resume-")
                .suffix(&suffix)
                .tempfile()
                .context("creating temporary resume file")?;
            file.write_all(&bytes)
                .and_then(|_| file.flush())
                .context("writing temporary resume file")?;
            Ok(parse(&parser, file.path()))
        })
        .await
        .context("resume parsing task failed")??;

        Ok(result)
    }
}
