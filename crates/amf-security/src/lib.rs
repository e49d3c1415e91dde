//! # amf-security
//!
//! Documentation view models for AMF security schemes.
//! Walks an AMF graph (expanded or compact JSON-LD) and projects security
//! schemes, OAuth 1 settings and OAuth 2 settings and flows into flat,
//! serializable records for a rendering layer.

pub mod vocab;
pub mod graph;
pub mod scheme;
pub mod oauth1;
pub mod oauth2;
mod types;
mod document;
mod error;

#[cfg(test)]
mod scenarios;

pub use types::*;
pub use vocab::{Namespace, Term, Vocabulary};
pub use graph::{ensure_array, GraphAccessor};
pub use scheme::{resolve_scheme, settings_kind, has_oauth1_settings, has_oauth2_settings};
pub use oauth2::grant_label;
pub use document::AmfDocument;
pub use error::{DocumentError, DocumentResult};
