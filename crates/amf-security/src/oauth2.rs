//! OAuth 2.0 settings and flow projection
//!
//! Two shapes of `OAuth2Settings` exist in the wild. RAML models list
//! `authorizationGrant` values and carry the endpoints and scopes on the
//! settings node itself, so the settings node is its own single flow. OAS
//! models list explicit `OAuth2Flow` nodes under `flows`. Both are accepted.

use crate::graph::{ensure_array, GraphAccessor};
use crate::types::{FlowScope, OAuth2FlowDocument, OAuth2SettingsDocument};
use crate::vocab::Term;
use serde_json::Value;

/// Project an `OAuth2Settings` node
pub fn project_settings(
    graph: &GraphAccessor<'_>,
    settings: Option<&Value>,
) -> OAuth2SettingsDocument {
    let Some(settings) = settings else {
        return OAuth2SettingsDocument::default();
    };

    let authorization_grants = graph.string_array(settings, Term::AuthorizationGrant);

    let flows = match graph.node_array(settings, Term::Flows) {
        Some(flows) => Some(flows.into_iter().cloned().collect()),
        None if graph.has_type(settings, Term::OAuth2Settings) => Some(vec![settings.clone()]),
        None => None,
    };

    OAuth2SettingsDocument {
        authorization_grants,
        flows,
    }
}

/// Project one flow
///
/// Accepts an `OAuth2Flow` node or a settings node. When handed settings
/// that list `flows`, the first listed flow is projected; an empty `flows`
/// list projects nothing.
pub fn project_flow(graph: &GraphAccessor<'_>, flow: Option<&Value>) -> OAuth2FlowDocument {
    let Some(input) = flow else {
        return OAuth2FlowDocument::default();
    };
    let Some(flow) = resolve_flow(graph, input) else {
        return OAuth2FlowDocument::default();
    };

    OAuth2FlowDocument {
        access_token_uri: graph.string(flow, Term::AccessTokenUri),
        authorization_uri: graph.string(flow, Term::AuthorizationUri),
        authorization_grant: graph
            .string(flow, Term::Flow)
            .or_else(|| graph.string(input, Term::Flow)),
        scopes: project_scopes(graph, flow),
    }
}

fn resolve_flow<'a>(graph: &GraphAccessor<'_>, input: &'a Value) -> Option<&'a Value> {
    match graph.node_array(input, Term::Flows) {
        Some(flows) => flows.first().copied(),
        None => Some(input),
    }
}

fn project_scopes(graph: &GraphAccessor<'_>, flow: &Value) -> Option<Vec<FlowScope>> {
    if !graph.has_type(flow, Term::OAuth2Flow) && !graph.has_type(flow, Term::OAuth2Settings) {
        return None;
    }

    let scopes: Vec<FlowScope> = ensure_array(graph.property(flow, Term::Scope))?
        .into_iter()
        .filter(|scope| scope.is_object())
        .map(|scope| FlowScope {
            label: graph.name(scope).unwrap_or_default(),
            description: graph.description(scope),
        })
        .collect();

    if scopes.is_empty() {
        None
    } else {
        Some(scopes)
    }
}

/// Human readable label for a grant type
///
/// Unknown grants (OAS extension grant URIs among them) are returned as is.
pub fn grant_label(grant: &str) -> &str {
    match grant {
        "implicit" => "Implicit",
        "authorization_code" | "authorizationCode" => "Authorization code",
        "password" => "Password",
        "client_credentials" | "clientCredentials" => "Client credentials",
        other => other,
    }
}
