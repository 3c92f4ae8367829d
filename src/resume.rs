//! Downloadable resume document.
//!
//! The document is either compiled into the binary or read from a file
//! configured at startup. A configured file is read on every download so
//! edits take effect without a restart.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ResumeConfig;

const EMBEDDED_RESUME: &str = include_str!("../assets/resume.txt");

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("failed to read resume from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("resume document is empty")]
    Empty,
}

/// Where the resume text comes from.
#[derive(Debug, Clone)]
pub enum ResumeSource {
    Embedded,
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Resume {
    source: ResumeSource,
    filename: String,
}

impl Resume {
    pub fn new(source: ResumeSource, owner_name: &str) -> Self {
        Self {
            source,
            filename: attachment_filename(owner_name),
        }
    }

    pub fn from_config(config: &ResumeConfig) -> Self {
        let source = match &config.path {
            Some(path) => ResumeSource::File(path.clone()),
            None => ResumeSource::Embedded,
        };
        Self::new(source, &config.owner_name)
    }

    /// Filename offered in `Content-Disposition`.
    pub fn attachment_filename(&self) -> &str {
        &self.filename
    }

    /// Load the document text.
    pub async fn load(&self) -> Result<String, ResumeError> {
        let content = match &self.source {
            ResumeSource::Embedded => EMBEDDED_RESUME.to_string(),
            ResumeSource::Inline(text) => text.clone(),
            ResumeSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ResumeError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };

        if content.trim().is_empty() {
            return Err(ResumeError::Empty);
        }
        Ok(content)
    }
}

/// `"Jit Goria"` → `"Jit_Goria_Resume.txt"`.
///
/// Whitespace runs become `_`; anything outside `[A-Za-z0-9_.-]` is dropped
/// so the name is safe inside a quoted header value.
pub fn attachment_filename(owner_name: &str) -> String {
    let stem: String = owner_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    if stem.is_empty() {
        "Resume.txt".to_string()
    } else {
        format!("{stem}_Resume.txt")
    }
}
