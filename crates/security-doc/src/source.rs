//! Where a model is loaded from

use amf_security::{AmfDocument, DocumentResult};
use std::path::PathBuf;
use tracing::info;

/// Model location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Local JSON-LD (or YAML) file
    File(PathBuf),
    /// Remote model fetched over HTTP(S)
    Url(String),
}

impl ModelSource {
    /// Interpret a command line argument
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            ModelSource::Url(arg.to_string())
        } else {
            ModelSource::File(PathBuf::from(arg))
        }
    }

    /// Load the model
    pub async fn load(&self) -> DocumentResult<AmfDocument> {
        let document = match self {
            ModelSource::File(path) => AmfDocument::from_file(path)?,
            ModelSource::Url(url) => AmfDocument::fetch(url).await?,
        };

        info!(
            compact = document.is_compact(),
            schemes = document.security_schemes().len(),
            "Loaded AMF model"
        );
        Ok(document)
    }
}
