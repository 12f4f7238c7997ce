use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::filter::Filter;

/// A dynamic per-document attribute.
///
/// Exactly one variant is held at a time; `Empty` marks a default value or a
/// wire field that carried no recognized variant. Accessors return a zero
/// value when asked for the wrong variant instead of failing, matching the
/// lenient access discipline of the service's other SDKs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Field {
    #[default]
    Empty,
    Text(String),
    Uint64(u64),
    Double(f64),
    TextList(Vec<String>),
}

impl Field {
    pub fn is_text(&self) -> bool {
        matches!(self, Field::Text(_))
    }

    pub fn is_uint64(&self) -> bool {
        matches!(self, Field::Uint64(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Field::Double(_))
    }

    pub fn is_text_list(&self) -> bool {
        matches!(self, Field::TextList(_))
    }

    pub fn as_text(&self) -> &str {
        match self {
            Field::Text(value) => value,
            _ => "",
        }
    }

    pub fn as_uint64(&self) -> u64 {
        match self {
            Field::Uint64(value) => *value,
            _ => 0,
        }
    }

    pub fn as_double(&self) -> f64 {
        match self {
            Field::Double(value) => *value,
            _ => 0.0,
        }
    }

    pub fn as_text_list(&self) -> &[String] {
        match self {
            Field::TextList(values) => values,
            _ => &[],
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<u64> for Field {
    fn from(value: u64) -> Self {
        Field::Uint64(value)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Double(value)
    }
}

impl From<Vec<String>> for Field {
    fn from(values: Vec<String>) -> Self {
        Field::TextList(values)
    }
}

/// A record in a collection: unique primary key, dense vector and a map of
/// named attributes. `score` is populated only on search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub vector: Vec<f32>,
    pub fields: HashMap<String, Field>,
    pub score: Option<f32>,
}

impl Document {
    pub fn new(id: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            vector,
            fields: HashMap::new(),
            score: None,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Field>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// Options for an upsert call.
#[derive(Debug, Clone, Copy)]
pub struct UpsertOptions {
    /// Index the written documents immediately.
    pub build_index: bool,
}

impl Default for UpsertOptions {
    fn default() -> Self {
        Self { build_index: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpsertResult {
    pub message: String,
    pub affected_count: u32,
}

/// Options for a query call. When no document ids are supplied the filter
/// together with offset/limit acts as the scan bound.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub filter: Option<Filter>,
    pub retrieve_vector: bool,
    pub output_fields: Vec<String>,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub message: String,
    pub documents: Vec<Document>,
    /// Total number of documents matching the scan bound, independent of
    /// offset/limit.
    pub total: u64,
}

/// Search input; exactly one mode is used per call.
#[derive(Debug, Clone)]
pub enum SearchTarget {
    /// Nearest neighbors of explicit query vectors.
    Vectors(Vec<Vec<f32>>),
    /// Nearest neighbors of the stored vectors of these documents.
    DocumentIds(Vec<String>),
    /// Raw text routed through server-side embedding, then searched.
    Text(Vec<String>),
}

/// Algorithm tuning for a single search call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    /// Partitions probed by IVF variants.
    pub nprobe: u32,
    /// Traversal breadth for HNSW.
    pub ef: u32,
    /// Radius bound; 0 disables it.
    pub radius: f32,
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub filter: Option<Filter>,
    pub params: Option<SearchParams>,
    pub retrieve_vector: bool,
    pub output_fields: Vec<String>,
    pub limit: i64,
}

/// One ordered, scored result list per input query, in input order. The
/// warning is set for partial or degraded results, e.g. a truncated
/// text-to-embedding search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub message: String,
    pub warning: String,
    pub documents: Vec<Vec<Document>>,
}

/// Partial update scoped by id list and/or filter; the two compose as an
/// intersection on the service side.
#[derive(Debug, Clone, Default)]
pub struct UpdateParams {
    pub query_ids: Vec<String>,
    pub query_filter: Option<Filter>,
    pub update_vector: Vec<f32>,
    pub update_fields: HashMap<String, Field>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    pub message: String,
    pub affected_count: u32,
}

/// Delete scope; ids and filter intersect, `limit` 0 leaves the count
/// uncapped.
#[derive(Debug, Clone, Default)]
pub struct DeleteParams {
    pub document_ids: Vec<String>,
    pub filter: Option<Filter>,
    pub limit: i64,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteResult {
    pub message: String,
    pub affected_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_holds_no_variant() {
        let field = Field::default();
        assert_eq!(field, Field::Empty);
        assert!(!field.is_text());
        assert!(!field.is_uint64());
        assert!(!field.is_double());
        assert!(!field.is_text_list());
    }

    #[test]
    fn accessors_return_zero_values_on_mismatch() {
        let field = Field::Uint64(42);
        assert_eq!(field.as_uint64(), 42);
        assert_eq!(field.as_text(), "");
        assert_eq!(field.as_double(), 0.0);
        assert!(field.as_text_list().is_empty());

        let field = Field::Text("segment".into());
        assert_eq!(field.as_text(), "segment");
        assert_eq!(field.as_uint64(), 0);
    }

    #[test]
    fn from_conversions_pick_the_matching_variant() {
        assert!(Field::from("title").is_text());
        assert!(Field::from(7u64).is_uint64());
        assert!(Field::from(0.5f64).is_double());
        assert!(Field::from(vec!["a".to_string()]).is_text_list());
    }

    #[test]
    fn document_builder() {
        let doc = Document::new("0001", vec![0.1, 0.2, 0.3])
            .with_field("bookName", "dream")
            .with_field("page", 21u64);
        assert_eq!(doc.id, "0001");
        assert_eq!(doc.vector.len(), 3);
        assert_eq!(doc.fields["bookName"].as_text(), "dream");
        assert_eq!(doc.fields["page"].as_uint64(), 21);
        assert_eq!(doc.score, None);
    }
}
