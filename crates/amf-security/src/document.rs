//! AMF model loading and security lookups

use crate::error::{DocumentError, DocumentResult};
use crate::graph::{ensure_array, GraphAccessor};
use crate::types::SecurityDocumentation;
use crate::vocab::{Term, Vocabulary};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// A loaded AMF graph document
#[derive(Debug, Clone)]
pub struct AmfDocument {
    document: Value,
    vocab: Vocabulary,
}

impl AmfDocument {
    /// Wrap an already parsed document
    ///
    /// The document must be the root node or an array whose first element
    /// is the root node.
    pub fn new(document: Value) -> DocumentResult<Self> {
        let root = match &document {
            Value::Array(items) => items.first(),
            other => Some(other),
        };
        if !matches!(root, Some(Value::Object(_))) {
            return Err(DocumentError::InvalidFormat(
                "expected a root node or an array holding one".to_string(),
            ));
        }

        let vocab = Vocabulary::detect(&document);
        Ok(Self { document, vocab })
    }

    /// Parse a model from a string (auto-detects JSON/YAML)
    pub fn parse(content: &str) -> DocumentResult<Self> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('[') || trimmed.starts_with('{') {
            Self::parse_json(content)
        } else {
            Self::parse_yaml(content)
        }
    }

    /// Parse a model from JSON
    pub fn parse_json(content: &str) -> DocumentResult<Self> {
        Self::new(serde_json::from_str(content)?)
    }

    /// Parse a model from YAML
    pub fn parse_yaml(content: &str) -> DocumentResult<Self> {
        Self::new(serde_yaml::from_str(content)?)
    }

    /// Load a model from a file
    pub fn from_file(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let path = path.as_ref();
        debug!("Loading AMF model from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Fetch and parse a model from a URL
    pub async fn fetch(url: &str) -> DocumentResult<Self> {
        let parsed = url::Url::parse(url).map_err(|e| DocumentError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DocumentError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        info!("Fetching AMF model from: {}", url);

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| DocumentError::HttpError(e.to_string()))?;

        let response = client
            .get(parsed)
            .header("Accept", "application/ld+json, application/json, application/yaml")
            .send()
            .await
            .map_err(|e| DocumentError::FetchError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DocumentError::FetchError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let content = response
            .text()
            .await
            .map_err(|e| DocumentError::FetchError(e.to_string()))?;

        Self::parse(&content)
    }

    /// The document as loaded
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The root node
    pub fn root(&self) -> &Value {
        match &self.document {
            Value::Array(items) => items.first().unwrap_or(&self.document),
            other => other,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn is_compact(&self) -> bool {
        self.vocab.is_compact()
    }

    /// Graph accessor bound to this document's vocabulary
    pub fn accessor(&self) -> GraphAccessor<'_> {
        GraphAccessor::new(&self.vocab)
    }

    /// Declared (reusable) nodes
    pub fn declares(&self) -> Vec<&Value> {
        ensure_array(self.accessor().property(self.root(), Term::Declares)).unwrap_or_default()
    }

    /// The encoded domain element
    pub fn encodes(&self) -> Option<&Value> {
        self.accessor().sub_object(self.root(), Term::Encodes)
    }

    /// Every security scheme the document declares
    ///
    /// A security scheme fragment declares nothing and encodes the scheme
    /// itself; that scheme is returned instead.
    pub fn security_schemes(&self) -> Vec<&Value> {
        let graph = self.accessor();
        let declared: Vec<&Value> = self
            .declares()
            .into_iter()
            .filter(|node| graph.has_type(node, Term::SecurityScheme))
            .collect();

        if !declared.is_empty() {
            return declared;
        }

        self.encodes()
            .filter(|node| graph.has_type(node, Term::SecurityScheme))
            .into_iter()
            .collect()
    }

    /// Name of a declared node (`core:name`, falling back to `security:name`)
    pub fn declared_name(&self, node: &Value) -> Option<String> {
        let graph = self.accessor();
        graph
            .name(node)
            .or_else(|| graph.string(node, Term::SecurityName))
    }

    /// Find a declared security scheme by name
    pub fn lookup_security(&self, name: &str) -> Option<&Value> {
        let found = self
            .security_schemes()
            .into_iter()
            .find(|node| self.declared_name(node).as_deref() == Some(name));
        if found.is_none() {
            warn!("Security scheme {} not found in model", name);
        }
        found
    }

    /// Find the flow of OAuth 2 settings with the given grant type
    pub fn lookup_flow<'a>(&self, settings: &'a Value, grant: &str) -> Option<&'a Value> {
        let graph = self.accessor();
        let settings = match settings {
            Value::Array(items) => items.first()?,
            other => other,
        };

        graph
            .node_array(settings, Term::Flows)?
            .into_iter()
            .find(|flow| graph.string(flow, Term::Flow).as_deref() == Some(grant))
    }

    /// Security requirements of an operation
    ///
    /// The endpoint is matched by exact path, the operation by HTTP method
    /// ignoring case.
    pub fn lookup_operation_security(&self, path: &str, method: &str) -> Option<Vec<&Value>> {
        let graph = self.accessor();
        let api = self.encodes()?;

        let endpoint = graph
            .node_array(api, Term::Endpoint)?
            .into_iter()
            .find(|endpoint| graph.string(endpoint, Term::Path).as_deref() == Some(path))?;

        let operation = graph
            .node_array(endpoint, Term::SupportedOperation)?
            .into_iter()
            .find(|op| {
                graph
                    .string(op, Term::Method)
                    .is_some_and(|m| m.eq_ignore_ascii_case(method))
            })?;

        ensure_array(graph.property(operation, Term::Security))
    }

    /// Documentation view of a declared security scheme
    pub fn documentation(&self, name: &str) -> Option<SecurityDocumentation> {
        let security = self.lookup_security(name)?;
        SecurityDocumentation::project(&self.accessor(), security)
    }
}
