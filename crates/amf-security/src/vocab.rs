//! AMF vocabulary terms and per-document key resolution
//!
//! AMF models come in two serializations of the same graph: the expanded
//! form keys every property by its absolute IRI, the compact form uses
//! `prefix:term` shorthands declared in the root `@context`. A [`Vocabulary`]
//! is detected once per document and then resolves every [`Term`] the same
//! way for the rest of the projection pass.

use serde_json::Value;
use tracing::debug;

/// Vocabulary namespaces used by security documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Document,
    Core,
    Security,
    ApiContract,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Document,
        Namespace::Core,
        Namespace::Security,
        Namespace::ApiContract,
    ];

    /// Absolute IRI of the namespace
    pub fn iri(&self) -> &'static str {
        match self {
            Namespace::Document => "http://a.ml/vocabularies/document#",
            Namespace::Core => "http://a.ml/vocabularies/core#",
            Namespace::Security => "http://a.ml/vocabularies/security#",
            Namespace::ApiContract => "http://a.ml/vocabularies/apiContract#",
        }
    }

    /// Prefix AMF uses for the namespace in compact documents
    pub fn default_prefix(&self) -> &'static str {
        match self {
            Namespace::Document => "doc",
            Namespace::Core => "core",
            Namespace::Security => "security",
            Namespace::ApiContract => "apiContract",
        }
    }

    fn index(&self) -> usize {
        match self {
            Namespace::Document => 0,
            Namespace::Core => 1,
            Namespace::Security => 2,
            Namespace::ApiContract => 3,
        }
    }

    fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.iri() == iri)
    }
}

/// Every vocabulary term read from an AMF model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    // document
    Declares,
    Encodes,
    References,
    CustomDomainProperties,

    // core
    Name,
    Description,

    // security: types
    SecurityScheme,
    SecurityRequirement,
    OAuth1Settings,
    OAuth2Settings,
    OAuth2Flow,

    // security: properties
    SecurityName,
    SchemeType,
    Settings,
    Scheme,
    Schemes,
    Security,
    RequestTokenUri,
    AuthorizationUri,
    TokenCredentialsUri,
    Signature,
    AccessTokenUri,
    AuthorizationGrant,
    Flow,
    Flows,
    Scope,

    // apiContract
    Endpoint,
    Path,
    SupportedOperation,
    Method,
    Header,
    Parameter,
    Response,
}

impl Term {
    /// Namespace the term belongs to
    pub fn namespace(&self) -> Namespace {
        use Term::*;
        match self {
            Declares | Encodes | References | CustomDomainProperties => Namespace::Document,
            Name | Description => Namespace::Core,
            SecurityScheme | SecurityRequirement | OAuth1Settings | OAuth2Settings | OAuth2Flow
            | SecurityName | SchemeType | Settings | Scheme | Schemes | Security
            | RequestTokenUri | AuthorizationUri | TokenCredentialsUri | Signature
            | AccessTokenUri | AuthorizationGrant | Flow | Flows | Scope => Namespace::Security,
            Endpoint | Path | SupportedOperation | Method | Header | Parameter | Response => {
                Namespace::ApiContract
            }
        }
    }

    /// Local part of the term within its namespace
    pub fn local_name(&self) -> &'static str {
        use Term::*;
        match self {
            Declares => "declares",
            Encodes => "encodes",
            References => "references",
            CustomDomainProperties => "customDomainProperties",
            Name => "name",
            Description => "description",
            SecurityScheme => "SecurityScheme",
            SecurityRequirement => "SecurityRequirement",
            OAuth1Settings => "OAuth1Settings",
            OAuth2Settings => "OAuth2Settings",
            OAuth2Flow => "OAuth2Flow",
            SecurityName => "name",
            SchemeType => "type",
            Settings => "settings",
            Scheme => "scheme",
            Schemes => "schemes",
            Security => "security",
            RequestTokenUri => "requestTokenUri",
            AuthorizationUri => "authorizationUri",
            TokenCredentialsUri => "tokenCredentialsUri",
            Signature => "signature",
            AccessTokenUri => "accessTokenUri",
            AuthorizationGrant => "authorizationGrant",
            Flow => "flow",
            Flows => "flows",
            Scope => "scope",
            Endpoint => "endpoint",
            Path => "path",
            SupportedOperation => "supportedOperation",
            Method => "method",
            Header => "header",
            Parameter => "parameter",
            Response => "response",
        }
    }

    /// Absolute IRI of the term
    pub fn iri(&self) -> String {
        format!("{}{}", self.namespace().iri(), self.local_name())
    }
}

/// Key resolver for one AMF document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    prefixes: [Option<String>; 4],
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::expanded()
    }
}

impl Vocabulary {
    /// Resolver for documents keyed by absolute IRIs
    pub fn expanded() -> Self {
        Self {
            prefixes: [None, None, None, None],
        }
    }

    /// Resolver for compact documents using AMF's default prefixes
    pub fn compact() -> Self {
        Self {
            prefixes: Namespace::ALL.map(|ns| Some(ns.default_prefix().to_string())),
        }
    }

    /// Detect the serialization used by a document
    ///
    /// The document may be the root node or an array holding it. When the
    /// root has an `@context`, only the namespaces it maps resolve to
    /// `prefix:term` keys; every other namespace keeps absolute IRIs. A root
    /// without a usable context is compact only if it carries a
    /// `doc:declares` or `doc:encodes` key.
    pub fn detect(document: &Value) -> Self {
        let root = match document {
            Value::Array(items) => items.first(),
            other => Some(other),
        };
        let Some(Value::Object(root)) = root else {
            return Self::expanded();
        };

        let mut vocab = Self::expanded();
        if let Some(Value::Object(context)) = root.get("@context") {
            for (prefix, iri) in context {
                if prefix.starts_with('@') {
                    continue;
                }
                if let Some(ns) = iri.as_str().and_then(Namespace::from_iri) {
                    vocab.prefixes[ns.index()] = Some(prefix.clone());
                }
            }
        }

        if !vocab.is_compact() {
            let defaults = Self::compact();
            let declares = defaults.resolve(Term::Declares);
            let encodes = defaults.resolve(Term::Encodes);
            if root.contains_key(&declares) || root.contains_key(&encodes) {
                vocab = defaults;
            }
        }

        debug!(compact = vocab.is_compact(), "Detected AMF document vocabulary");
        vocab
    }

    /// Whether any namespace resolves to compact terms
    pub fn is_compact(&self) -> bool {
        self.prefixes.iter().any(Option::is_some)
    }

    /// Prefix in effect for a namespace, if it is compacted
    pub fn prefix(&self, ns: Namespace) -> Option<&str> {
        self.prefixes[ns.index()].as_deref()
    }

    /// Resolve a term to the key (or `@type` value) used by the document
    pub fn resolve(&self, term: Term) -> String {
        match self.prefix(term.namespace()) {
            Some(prefix) => format!("{}:{}", prefix, term.local_name()),
            None => term.iri(),
        }
    }
}
