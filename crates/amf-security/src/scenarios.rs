//! End-to-end projections over the bundled AMF models

use crate::document::AmfDocument;
use crate::graph::GraphAccessor;
use crate::types::*;
use crate::vocab::Term;
use crate::{oauth1, oauth2, scheme};

const DEMO: &str = include_str!("../fixtures/demo-api.json");
const DEMO_COMPACT: &str = include_str!("../fixtures/demo-api-compact.json");
const MULTI_FLOW: &str = include_str!("../fixtures/multi-oauth2-flow.json");
const MULTI_FLOW_COMPACT: &str = include_str!("../fixtures/multi-oauth2-flow-compact.json");

fn models(expanded: &str, compact: &str) -> [AmfDocument; 2] {
    [
        AmfDocument::parse(expanded).unwrap(),
        AmfDocument::parse(compact).unwrap(),
    ]
}

fn scheme_document(doc: &AmfDocument, name: &str) -> SecuritySchemeDocument {
    let graph = doc.accessor();
    let security = doc.lookup_security(name).unwrap();
    let resolved = scheme::resolve_scheme(&graph, security).unwrap();
    scheme::project(&graph, resolved)
}

fn len(nodes: &Option<Vec<serde_json::Value>>) -> Option<usize> {
    nodes.as_ref().map(|n| n.len())
}

#[test]
fn test_basic_scheme() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let scheme = scheme_document(&doc, "basic");

        assert_eq!(scheme.scheme_type.as_deref(), Some("Basic Authentication"));
        assert_eq!(
            scheme.description.as_deref(),
            Some("This API supports Basic Authentication.\n")
        );
        assert_eq!(len(&scheme.headers), Some(1));
        assert_eq!(scheme.query_parameters, None);
        assert_eq!(scheme.responses, None);
        assert_eq!(scheme.settings, None);
    }
}

#[test]
fn test_basic_scheme_accepts_array_input() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let graph = doc.accessor();
        let security = doc.lookup_security("basic").unwrap().clone();
        let wrapped = serde_json::Value::Array(vec![security]);

        let view = SecurityDocumentation::project(&graph, &wrapped).unwrap();
        assert_eq!(view.scheme.scheme_type.as_deref(), Some("Basic Authentication"));
    }
}

#[test]
fn test_oauth1_scheme() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let graph = doc.accessor();
        let scheme = scheme_document(&doc, "oauth_1_0");

        assert_eq!(scheme.scheme_type.as_deref(), Some("OAuth 1.0"));
        assert_eq!(
            scheme.description.as_deref(),
            Some("OAuth 1.0 continues to be supported for all API requests, but OAuth 2.0 is now preferred.")
        );
        assert_eq!(len(&scheme.headers), Some(1));
        assert_eq!(len(&scheme.query_parameters), Some(1));
        assert_eq!(len(&scheme.responses), Some(1));
        assert!(scheme::has_oauth1_settings(&graph, scheme.settings.as_ref()));
        assert!(!scheme::has_oauth2_settings(&graph, scheme.settings.as_ref()));

        let settings = oauth1::project(&graph, scheme.settings.as_ref());
        assert_eq!(
            settings.request_token_uri.as_deref(),
            Some("http://api.domain.com/oauth1/request_token")
        );
        assert_eq!(
            settings.authorization_uri.as_deref(),
            Some("http://api.domain.com/oauth1/authorize")
        );
        assert_eq!(
            settings.token_credentials_uri.as_deref(),
            Some("http://api.domain.com/oauth1/access_token")
        );
        assert_eq!(
            settings.signatures,
            Some(vec!["RSA-SHA1".to_string(), "HMAC-SHA1".to_string()])
        );
    }
}

#[test]
fn test_raml_oauth2_scheme() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let graph = doc.accessor();
        let scheme = scheme_document(&doc, "oauth_2_0");

        assert_eq!(scheme.scheme_type.as_deref(), Some("OAuth 2.0"));
        assert_eq!(len(&scheme.responses), Some(2));
        assert!(scheme::has_oauth2_settings(&graph, scheme.settings.as_ref()));

        let settings = oauth2::project_settings(&graph, scheme.settings.as_ref());
        assert_eq!(
            settings.authorization_grants,
            Some(vec![
                "authorization_code".to_string(),
                "implicit".to_string(),
                "https://schema.org/auth".to_string()
            ])
        );
        let flows = settings.flows.unwrap();
        assert_eq!(flows.len(), 1);

        let flow = oauth2::project_flow(&graph, flows.first());
        assert_eq!(
            flow.access_token_uri.as_deref(),
            Some("http://api.domain.com/oauth2/token")
        );
        assert_eq!(
            flow.authorization_uri.as_deref(),
            Some("http://api.domain.com/oauth2/auth")
        );
        assert_eq!(
            flow.scopes,
            Some(vec![
                FlowScope { label: "profile".to_string(), description: None },
                FlowScope { label: "email".to_string(), description: None },
            ])
        );
    }
}

#[test]
fn test_oas_multi_flow_scheme() {
    for doc in models(MULTI_FLOW, MULTI_FLOW_COMPACT) {
        let graph = doc.accessor();
        let scheme = scheme_document(&doc, "oAuthSample");
        let settings_node = scheme.settings.as_ref().unwrap();

        let settings = oauth2::project_settings(&graph, Some(settings_node));
        assert_eq!(settings.authorization_grants, None);
        assert_eq!(len(&settings.flows), Some(3));

        let flow_node = doc.lookup_flow(settings_node, "authorizationCode").unwrap();
        let flow = oauth2::project_flow(&graph, Some(flow_node));
        assert_eq!(flow.authorization_grant.as_deref(), Some("authorizationCode"));
        assert_eq!(
            flow.access_token_uri.as_deref(),
            Some("https://example.com/oauth/token")
        );
        assert_eq!(
            flow.authorization_uri.as_deref(),
            Some("https://example.com/oauth/authorize")
        );

        let scopes = flow.scopes.unwrap();
        assert_eq!(scopes.len(), 3);
        assert!(scopes.contains(&FlowScope {
            label: "admin".to_string(),
            description: Some("Grants access to admin operations".to_string()),
        }));
    }
}

#[test]
fn test_oas_flow_with_single_scope_node() {
    for doc in models(MULTI_FLOW, MULTI_FLOW_COMPACT) {
        let graph = doc.accessor();
        let scheme = scheme_document(&doc, "oAuthSample");
        let flow_node = doc
            .lookup_flow(scheme.settings.as_ref().unwrap(), "implicit")
            .unwrap();

        let flow = oauth2::project_flow(&graph, Some(flow_node));
        assert_eq!(flow.scopes.map(|s| s.len()), Some(1));
    }
}

#[test]
fn test_oauth2_without_scopes() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let graph = doc.accessor();
        let scheme = scheme_document(&doc, "oauth_2_0_no_scopes");

        let settings = oauth2::project_settings(&graph, scheme.settings.as_ref());
        let flows = settings.flows.unwrap();
        let flow = oauth2::project_flow(&graph, flows.first());

        assert_eq!(flow.scopes, None);
        assert_eq!(
            flow.access_token_uri.as_deref(),
            Some("http://api.domain.com/oauth2/token")
        );
    }
}

#[test]
fn test_annotated_oauth2_scheme() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let scheme = scheme_document(&doc, "oauth2Annotated");

        assert_eq!(scheme.scheme_type.as_deref(), Some("OAuth 2.0"));
        assert_eq!(scheme.description, None);
        assert_eq!(scheme.headers, None);
        assert_eq!(len(&scheme.query_parameters), Some(1));
        assert_eq!(scheme.responses, None);
        assert!(scheme.has_custom_properties);
    }
}

#[test]
fn test_custom_scheme() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let graph = doc.accessor();
        let scheme = scheme_document(&doc, "x-custom");

        assert_eq!(scheme.scheme_type.as_deref(), Some("x-custom"));
        assert_eq!(
            scheme.description.as_deref(),
            Some("A custom security scheme for authenticating requests.\n")
        );
        assert_eq!(len(&scheme.headers), Some(1));
        assert_eq!(len(&scheme.query_parameters), Some(2));
        assert_eq!(len(&scheme.responses), Some(2));
        assert_eq!(scheme.settings, None);
        assert_eq!(
            scheme::settings_kind(&graph, scheme.settings.as_ref()),
            SettingsKind::None
        );
    }
}

#[test]
fn test_operation_security_requirement() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let graph = doc.accessor();
        let security = doc
            .lookup_operation_security("/test-parameters/{feature}", "get")
            .unwrap();
        let requirements = serde_json::Value::Array(security.into_iter().cloned().collect());

        let view = SecurityDocumentation::project(&graph, &requirements).unwrap();
        assert_eq!(view.scheme.scheme_type.as_deref(), Some("OAuth 2.0"));
        assert!(view.has_oauth2_settings());
    }
}

#[test]
fn test_full_documentation_views() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let oauth1 = doc.documentation("oauth_1_0").unwrap();
        match oauth1.settings_document {
            Some(SettingsDocument::OAuth1(settings)) => {
                assert_eq!(settings.signatures.map(|s| s.len()), Some(2));
            }
            other => panic!("Expected OAuth 1 settings, got {:?}", other),
        }

        let oauth2 = doc.documentation("oauth_2_0").unwrap();
        match oauth2.settings_document {
            Some(SettingsDocument::OAuth2 { settings, flow_documents }) => {
                assert_eq!(settings.authorization_grants.map(|g| g.len()), Some(3));
                assert_eq!(flow_documents.len(), 1);
                assert_eq!(flow_documents[0].scopes.as_ref().map(|s| s.len()), Some(2));
            }
            other => panic!("Expected OAuth 2 settings, got {:?}", other),
        }

        assert_eq!(doc.documentation("basic").unwrap().settings_document, None);
    }

    for doc in models(MULTI_FLOW, MULTI_FLOW_COMPACT) {
        let view = doc.documentation("oAuthSample").unwrap();
        match view.settings_document {
            Some(SettingsDocument::OAuth2 { flow_documents, .. }) => {
                let grants: Vec<_> = flow_documents
                    .iter()
                    .filter_map(|f| f.authorization_grant.as_deref())
                    .collect();
                assert_eq!(grants, vec!["authorizationCode", "implicit", "clientCredentials"]);
            }
            other => panic!("Expected OAuth 2 settings, got {:?}", other),
        }
    }
}

#[test]
fn test_compact_and_expanded_project_equally() {
    let strip = |mut view: SecurityDocumentation| {
        // Raw nodes keep serialization-specific keys and ids
        view.scheme.headers = view.scheme.headers.map(|h| vec![serde_json::Value::Null; h.len()]);
        view.scheme.query_parameters =
            view.scheme.query_parameters.map(|q| vec![serde_json::Value::Null; q.len()]);
        view.scheme.responses = view.scheme.responses.map(|r| vec![serde_json::Value::Null; r.len()]);
        view.scheme.settings = view.scheme.settings.map(|_| serde_json::Value::Null);
        if let Some(SettingsDocument::OAuth2 { settings, .. }) = view.settings_document.as_mut() {
            settings.flows = settings.flows.take().map(|f| vec![serde_json::Value::Null; f.len()]);
        }
        view
    };

    for (expanded, compact) in [(DEMO, DEMO_COMPACT), (MULTI_FLOW, MULTI_FLOW_COMPACT)] {
        let [expanded, compact] = models(expanded, compact);
        for node in expanded.security_schemes() {
            let name = expanded.declared_name(node).unwrap();
            assert_eq!(
                strip(expanded.documentation(&name).unwrap()),
                strip(compact.documentation(&name).unwrap()),
                "scheme {} differs between serializations",
                name
            );
        }
    }
}

#[test]
fn test_projection_is_idempotent() {
    for doc in models(DEMO, DEMO_COMPACT) {
        for node in doc.security_schemes() {
            let graph = doc.accessor();
            assert_eq!(
                SecurityDocumentation::project(&graph, node),
                SecurityDocumentation::project(&graph, node)
            );
        }
    }
}

#[test]
fn test_dispatch_is_exclusive_across_models() {
    for doc in models(DEMO, DEMO_COMPACT) {
        let graph: GraphAccessor<'_> = doc.accessor();
        for node in doc.security_schemes() {
            let settings = graph.sub_object(node, Term::Settings);
            assert!(
                !(scheme::has_oauth1_settings(&graph, settings)
                    && scheme::has_oauth2_settings(&graph, settings))
            );
        }
    }
}
