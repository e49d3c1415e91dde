//! View-model records produced from AMF security descriptions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields of a security scheme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySchemeDocument {
    /// Scheme type name (e.g. "OAuth 2.0", "Basic Authentication", "x-custom")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,
    /// Markdown description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Header parameter nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<Value>>,
    /// Query parameter nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<Vec<Value>>,
    /// Response nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<Value>>,
    /// Settings node (OAuth 1 / OAuth 2 only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    /// Whether the scheme carries custom domain properties
    #[serde(default)]
    pub has_custom_properties: bool,
}

/// Which settings projector applies to a settings node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsKind {
    OAuth1,
    OAuth2,
    None,
}

/// OAuth 1.0 settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth1SettingsDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_credentials_uri: Option<String>,
    /// Supported signature methods, in declaration order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<String>>,
}

/// OAuth 2.0 settings
///
/// RAML-style settings list `authorization_grants` and act as their own
/// single flow. OAS-style settings list explicit flow nodes instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2SettingsDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_grants: Option<Vec<String>>,
    /// Flow nodes to project with [`crate::oauth2::project_flow`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<Vec<Value>>,
}

/// One OAuth 2.0 scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowScope {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One OAuth 2.0 flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2FlowDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_uri: Option<String>,
    /// Grant type (e.g. "authorizationCode", "implicit", or an extension URI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_grant: Option<String>,
    /// Scopes; absent when the flow declares none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<FlowScope>>,
}

/// Projected settings section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SettingsDocument {
    OAuth1(OAuth1SettingsDocument),
    OAuth2 {
        #[serde(flatten)]
        settings: OAuth2SettingsDocument,
        /// Projection of each entry of `settings.flows`
        #[serde(rename = "flowDocuments")]
        flow_documents: Vec<OAuth2FlowDocument>,
    },
}

/// Complete documentation view for one security scheme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDocumentation {
    #[serde(flatten)]
    pub scheme: SecuritySchemeDocument,
    #[serde(rename = "settingsDocument", skip_serializing_if = "Option::is_none")]
    pub settings_document: Option<SettingsDocument>,
}
