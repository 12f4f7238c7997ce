use serde::{Deserialize, Serialize};

use super::index::{FieldType, IndexType, MetricType};

/// Tuning parameters of a vector index; which ones apply depends on the
/// index type (m/ef_construction for graph indexes, n_list/n_probe for
/// partitioned ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexParams {
    pub m: u32,
    pub ef_construction: u32,
    pub n_list: u32,
    pub n_probe: u32,
}

/// Index over the dense vector field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorIndex {
    pub field_name: String,
    pub field_type: FieldType,
    pub index_type: IndexType,
    pub dimension: u32,
    pub metric_type: MetricType,
    pub params: IndexParams,
    pub index_count: u64,
}

impl VectorIndex {
    pub fn new(field_name: impl Into<String>, index_type: IndexType, dimension: u32) -> Self {
        Self {
            field_name: field_name.into(),
            field_type: FieldType::Vector,
            index_type,
            dimension,
            ..Default::default()
        }
    }
}

/// Scalar index used by filter expressions; `elem_type` is set for array
/// fields only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterIndex {
    pub field_name: String,
    pub field_type: FieldType,
    pub index_type: IndexType,
    pub elem_type: Option<FieldType>,
}

impl FilterIndex {
    pub fn new(
        field_name: impl Into<String>,
        field_type: FieldType,
        index_type: IndexType,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            field_type,
            index_type,
            elem_type: None,
        }
    }
}

/// Index configuration of a collection. The service requires exactly one
/// primary-key filter index and one vector index before documents can be
/// written; that invariant is checked remotely, not here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Indexes {
    pub vector_index: Vec<VectorIndex>,
    pub filter_index: Vec<FilterIndex>,
}

/// Build progress of the collection's indexes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexStatus {
    pub status: String,
    pub progress: String,
    pub start_time: String,
}

/// Server-side mapping from a source text field to a generated vector field
/// via a named model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Embedding {
    pub field: String,
    pub vector_field: String,
    pub model: String,
    pub enabled: bool,
}

/// A named, schema-flexible container of documents inside a database.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    pub database: String,
    pub collection_name: String,
    pub document_count: i64,
    pub alias: Vec<String>,
    pub shard_num: u32,
    pub replica_num: u32,
    pub indexes: Indexes,
    pub index_status: IndexStatus,
    pub embedding: Option<Embedding>,
    pub description: String,
    pub size: u64,
    pub create_time: String,
}

/// Optional settings for collection creation.
#[derive(Debug, Clone, Default)]
pub struct CreateCollectionOptions {
    pub embedding: Option<Embedding>,
}
