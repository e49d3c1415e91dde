//! Generic accessors over AMF graph nodes
//!
//! Graph nodes are JSON objects keyed by vocabulary terms. Any property may
//! hold a bare value or an array of values, and literals arrive wrapped as
//! `{"@value": ...}`. None of these helpers fail: a missing property, a
//! value of the wrong shape or `null` all read as absent.

use crate::vocab::{Term, Vocabulary};
use serde_json::Value;

const VALUE_KEY: &str = "@value";
const TYPE_KEY: &str = "@type";

/// Normalize a bare value or an array into a list
///
/// Absent and `null` stay absent, so an empty or missing property remains
/// distinguishable from a single value.
pub fn ensure_array(value: Option<&Value>) -> Option<Vec<&Value>> {
    match value? {
        Value::Null => None,
        Value::Array(items) => Some(items.iter().collect()),
        other => Some(vec![other]),
    }
}

/// First element of an array, or the value itself
fn first(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        Value::Null => None,
        other => Some(other),
    }
}

/// Unwrap a `{"@value": V}` envelope
fn unwrap_literal(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(obj) => obj.get(VALUE_KEY).filter(|v| !v.is_null()),
        Value::Null | Value::Array(_) => None,
        scalar => Some(scalar),
    }
}

/// Render a literal as a string
fn literal_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read-only view over graph nodes of one document
#[derive(Debug, Clone, Copy)]
pub struct GraphAccessor<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> GraphAccessor<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocab
    }

    /// Key for a term in the active serialization
    pub fn key(&self, term: Term) -> String {
        self.vocab.resolve(term)
    }

    /// Raw property value of a node
    pub fn property<'a>(&self, node: &'a Value, term: Term) -> Option<&'a Value> {
        node.as_object()?
            .get(&self.key(term))
            .filter(|v| !v.is_null())
    }

    /// First literal of a property, unwrapped
    pub fn value<'a>(&self, node: &'a Value, term: Term) -> Option<&'a Value> {
        self.property(node, term)
            .and_then(first)
            .and_then(unwrap_literal)
    }

    /// First literal of a property as a string
    pub fn string(&self, node: &Value, term: Term) -> Option<String> {
        self.value(node, term).and_then(literal_string)
    }

    /// Every element of a property, literals unwrapped, order kept
    ///
    /// Elements without an `@value` envelope (nested nodes) are returned
    /// as they are.
    pub fn value_array<'a>(&self, node: &'a Value, term: Term) -> Option<Vec<&'a Value>> {
        let items = ensure_array(self.property(node, term))?;
        Some(
            items
                .into_iter()
                .map(|item| unwrap_literal(item).unwrap_or(item))
                .collect(),
        )
    }

    /// Every literal of a property as strings, order kept
    pub fn string_array(&self, node: &Value, term: Term) -> Option<Vec<String>> {
        let items = self.value_array(node, term)?;
        Some(items.into_iter().filter_map(literal_string).collect())
    }

    /// Every nested node of a property, order kept
    pub fn node_array<'a>(&self, node: &'a Value, term: Term) -> Option<Vec<&'a Value>> {
        let items = ensure_array(self.property(node, term))?;
        Some(items.into_iter().filter(|item| item.is_object()).collect())
    }

    /// Nested node of a property, first one when plural
    pub fn sub_object<'a>(&self, node: &'a Value, term: Term) -> Option<&'a Value> {
        self.property(node, term)
            .and_then(first)
            .filter(|v| v.is_object())
    }

    /// Whether the node's `@type` set contains the type term
    pub fn has_type(&self, node: &Value, type_term: Term) -> bool {
        let Some(types) = node.as_object().and_then(|obj| obj.get(TYPE_KEY)) else {
            return false;
        };
        let expected = self.key(type_term);
        match types {
            Value::Array(items) => items.iter().any(|t| t.as_str() == Some(expected.as_str())),
            Value::String(t) => *t == expected,
            _ => false,
        }
    }

    /// Whether the node has a property at all
    pub fn has_property(&self, node: &Value, term: Term) -> bool {
        self.property(node, term).is_some()
    }

    /// Documentation text of a node
    pub fn description(&self, node: &Value) -> Option<String> {
        self.string(node, Term::Description)
    }

    /// Name of a node
    pub fn name(&self, node: &Value) -> Option<String> {
        self.string(node, Term::Name)
    }
}
