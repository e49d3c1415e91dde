//! Plain text output

use amf_security::{
    grant_label, settings_kind, AmfDocument, OAuth2FlowDocument, SecurityDocumentation,
    SettingsDocument, SettingsKind,
};
use serde::Serialize;

/// One row of the scheme listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeListing {
    pub name: String,
    #[serde(rename = "type")]
    pub scheme_type: Option<String>,
    pub settings: SettingsKind,
}

impl SchemeListing {
    /// List every security scheme of a model
    pub fn collect(document: &AmfDocument) -> Vec<Self> {
        let graph = document.accessor();
        document
            .security_schemes()
            .into_iter()
            .map(|node| {
                let scheme = amf_security::scheme::project(&graph, node);
                Self {
                    name: document.declared_name(node).unwrap_or_default(),
                    settings: settings_kind(&graph, scheme.settings.as_ref()),
                    scheme_type: scheme.scheme_type,
                }
            })
            .collect()
    }
}

/// Render a documentation view as indented text
pub fn render_summary(view: &SecurityDocumentation) -> String {
    let mut out = String::new();
    let scheme = &view.scheme;

    out.push_str(scheme.scheme_type.as_deref().unwrap_or("(untyped scheme)"));
    out.push('\n');
    if let Some(description) = &scheme.description {
        out.push_str(&format!("\n{}\n", description.trim_end()));
    }
    if scheme.has_custom_properties {
        out.push_str("\nCustom properties: yes\n");
    }

    match &view.settings_document {
        Some(SettingsDocument::OAuth1(settings)) => {
            out.push_str("\nSettings\n");
            line(&mut out, "Request token URI", settings.request_token_uri.as_deref());
            line(&mut out, "Authorization URI", settings.authorization_uri.as_deref());
            line(
                &mut out,
                "Token credentials URI",
                settings.token_credentials_uri.as_deref(),
            );
            list(&mut out, "Supported signatures", settings.signatures.as_deref());
        }
        Some(SettingsDocument::OAuth2 {
            settings,
            flow_documents,
        }) => {
            out.push_str("\nSettings\n");
            list(
                &mut out,
                "Authorization grants",
                settings.authorization_grants.as_deref(),
            );
            for flow in flow_documents {
                render_flow(&mut out, flow);
            }
        }
        None => {}
    }

    count(&mut out, "Query parameters", scheme.query_parameters.as_deref());
    count(&mut out, "Headers", scheme.headers.as_deref());
    count(&mut out, "Responses", scheme.responses.as_deref());

    out
}

fn render_flow(out: &mut String, flow: &OAuth2FlowDocument) {
    let title = flow
        .authorization_grant
        .as_deref()
        .map(grant_label)
        .unwrap_or("Flow");
    out.push_str(&format!("\n  {}\n", title));
    line(out, "  Access token URI", flow.access_token_uri.as_deref());
    line(out, "  Authorization URI", flow.authorization_uri.as_deref());
    if let Some(scopes) = &flow.scopes {
        out.push_str("    Authorization scopes:\n");
        for scope in scopes {
            match &scope.description {
                Some(description) => {
                    out.push_str(&format!("      - {} ({})\n", scope.label, description))
                }
                None => out.push_str(&format!("      - {}\n", scope.label)),
            }
        }
    }
}

fn line(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push_str(&format!("  {}: {}\n", label, value));
    }
}

fn list(out: &mut String, label: &str, values: Option<&[String]>) {
    let Some(values) = values.filter(|v| !v.is_empty()) else {
        return;
    };
    out.push_str(&format!("  {}:\n", label));
    for value in values {
        out.push_str(&format!("    - {}\n", value));
    }
}

fn count<T>(out: &mut String, label: &str, items: Option<&[T]>) {
    if let Some(items) = items.filter(|i| !i.is_empty()) {
        out.push_str(&format!("\n{}: {}\n", label, items.len()));
    }
}
