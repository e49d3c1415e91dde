//! Security scheme resolution and projection

use crate::graph::{ensure_array, GraphAccessor};
use crate::oauth1;
use crate::oauth2;
use crate::types::*;
use crate::vocab::Term;
use serde_json::Value;
use tracing::{debug, warn};

/// Find the `SecurityScheme` node behind a security input
///
/// The input may be the scheme itself (declarations), a
/// `SecurityRequirement` wrapping parametrized schemes (operations), a
/// parametrized scheme, or an array of any of these. Only the first
/// element of every plural value is followed.
pub fn resolve_scheme<'a>(graph: &GraphAccessor<'_>, security: &'a Value) -> Option<&'a Value> {
    let mut node = match security {
        Value::Array(items) => items.first()?,
        other => other,
    };

    if graph.has_type(node, Term::SecurityScheme) {
        return Some(node);
    }

    if graph.has_type(node, Term::SecurityRequirement) {
        node = graph.sub_object(node, Term::Schemes)?;
    }

    let scheme = graph.sub_object(node, Term::Scheme);
    if scheme.is_none() {
        debug!("Security input does not reference a scheme");
    }
    scheme
}

/// Project the fields of a `SecurityScheme` node
pub fn project(graph: &GraphAccessor<'_>, scheme: &Value) -> SecuritySchemeDocument {
    let nodes = |term| {
        ensure_array(graph.property(scheme, term))
            .map(|items| items.into_iter().cloned().collect::<Vec<_>>())
    };

    SecuritySchemeDocument {
        scheme_type: graph.string(scheme, Term::SchemeType),
        description: graph.description(scheme),
        headers: nodes(Term::Header),
        query_parameters: nodes(Term::Parameter),
        responses: nodes(Term::Response),
        settings: graph.sub_object(scheme, Term::Settings).cloned(),
        has_custom_properties: graph.has_property(scheme, Term::CustomDomainProperties),
    }
}

/// Decide which settings projector applies
///
/// A node typed as both OAuth 1 and OAuth 2 settings is contradictory and
/// gets no settings section.
pub fn settings_kind(graph: &GraphAccessor<'_>, settings: Option<&Value>) -> SettingsKind {
    let Some(settings) = settings else {
        return SettingsKind::None;
    };

    match (
        graph.has_type(settings, Term::OAuth1Settings),
        graph.has_type(settings, Term::OAuth2Settings),
    ) {
        (true, false) => SettingsKind::OAuth1,
        (false, true) => SettingsKind::OAuth2,
        (true, true) => {
            warn!("Settings node is typed as both OAuth 1 and OAuth 2 settings; ignoring it");
            SettingsKind::None
        }
        (false, false) => SettingsKind::None,
    }
}

pub fn has_oauth1_settings(graph: &GraphAccessor<'_>, settings: Option<&Value>) -> bool {
    settings_kind(graph, settings) == SettingsKind::OAuth1
}

pub fn has_oauth2_settings(graph: &GraphAccessor<'_>, settings: Option<&Value>) -> bool {
    settings_kind(graph, settings) == SettingsKind::OAuth2
}

/// Project a settings node according to its kind
pub fn project_settings(
    graph: &GraphAccessor<'_>,
    settings: Option<&Value>,
) -> Option<SettingsDocument> {
    match settings_kind(graph, settings) {
        SettingsKind::OAuth1 => Some(SettingsDocument::OAuth1(oauth1::project(graph, settings))),
        SettingsKind::OAuth2 => {
            let settings = oauth2::project_settings(graph, settings);
            let flow_documents = settings
                .flows
                .iter()
                .flatten()
                .map(|flow| oauth2::project_flow(graph, Some(flow)))
                .collect();
            Some(SettingsDocument::OAuth2 {
                settings,
                flow_documents,
            })
        }
        SettingsKind::None => None,
    }
}

impl SecurityDocumentation {
    /// Build the complete documentation view for a security input
    ///
    /// Returns `None` when no scheme can be resolved from the input.
    pub fn project(graph: &GraphAccessor<'_>, security: &Value) -> Option<Self> {
        let scheme = resolve_scheme(graph, security)?;
        let scheme = project(graph, scheme);
        let settings_document = project_settings(graph, scheme.settings.as_ref());

        Some(Self {
            scheme,
            settings_document,
        })
    }

    pub fn has_oauth1_settings(&self) -> bool {
        matches!(self.settings_document, Some(SettingsDocument::OAuth1(_)))
    }

    pub fn has_oauth2_settings(&self) -> bool {
        matches!(self.settings_document, Some(SettingsDocument::OAuth2 { .. }))
    }
}
