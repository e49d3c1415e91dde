//! # security-doc
//!
//! Command line front end for amf-security.
//! Loads an AMF model from a file or URL and prints security scheme
//! documentation as JSON or plain text.

mod error;
mod source;
pub mod summary;

pub use error::{CliError, Result};
pub use source::ModelSource;
pub use summary::{render_summary, SchemeListing};
