//! OAuth 1.0 settings projection

use crate::graph::GraphAccessor;
use crate::types::OAuth1SettingsDocument;
use crate::vocab::Term;
use serde_json::Value;

/// Project an `OAuth1Settings` node
///
/// The endpoint URIs may carry several values in the graph; only the first
/// one is surfaced. Signatures keep every value in order. Absent settings
/// produce an empty document.
pub fn project(graph: &GraphAccessor<'_>, settings: Option<&Value>) -> OAuth1SettingsDocument {
    let Some(settings) = settings else {
        return OAuth1SettingsDocument::default();
    };

    OAuth1SettingsDocument {
        request_token_uri: graph.string(settings, Term::RequestTokenUri),
        authorization_uri: graph.string(settings, Term::AuthorizationUri),
        token_credentials_uri: graph.string(settings, Term::TokenCredentialsUri),
        signatures: graph.string_array(settings, Term::Signature),
    }
}
