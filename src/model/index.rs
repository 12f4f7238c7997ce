use serde::{Deserialize, Serialize};

/// Logical type of an indexed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    String,
    Uint64,
    Array,
    Vector,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Uint64 => "uint64",
            FieldType::Array => "array",
            FieldType::Vector => "vector",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "uint64" => FieldType::Uint64,
            "array" => FieldType::Array,
            "vector" => FieldType::Vector,
            _ => FieldType::String,
        }
    }
}

/// Index structure backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexType {
    #[default]
    Flat,
    Hnsw,
    IvfFlat,
    IvfPq,
    IvfSq4,
    IvfSq8,
    IvfSq16,
    PrimaryKey,
    Filter,
}

impl IndexType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::Flat => "FLAT",
            IndexType::Hnsw => "HNSW",
            IndexType::IvfFlat => "IVF_FLAT",
            IndexType::IvfPq => "IVF_PQ",
            IndexType::IvfSq4 => "IVF_PQ4",
            IndexType::IvfSq8 => "IVF_PQ8",
            IndexType::IvfSq16 => "IVF_PQ16",
            IndexType::PrimaryKey => "primaryKey",
            IndexType::Filter => "filter",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "FLAT" => IndexType::Flat,
            "HNSW" => IndexType::Hnsw,
            "IVF_FLAT" => IndexType::IvfFlat,
            "IVF_PQ" => IndexType::IvfPq,
            "IVF_PQ4" => IndexType::IvfSq4,
            "IVF_PQ8" => IndexType::IvfSq8,
            "IVF_PQ16" => IndexType::IvfSq16,
            "primaryKey" => IndexType::PrimaryKey,
            _ => IndexType::Filter,
        }
    }
}

/// Distance metric for nearest-neighbor search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MetricType {
    #[default]
    Cosine,
    L2,
    Ip,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Cosine => "COSINE",
            MetricType::L2 => "L2",
            MetricType::Ip => "IP",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "L2" => MetricType::L2,
            "IP" => MetricType::Ip,
            _ => MetricType::Cosine,
        }
    }
}

/// Parameters for an index rebuild.
#[derive(Debug, Clone, Copy, Default)]
pub struct RebuildIndexParams {
    /// Drop the existing index before rebuilding.
    pub drop_before_rebuild: bool,
    /// Bound on rebuild resource usage; 0 leaves it to the service.
    pub throttle: i32,
}

/// Outcome of a rebuild request; the tasks complete asynchronously and can
/// be polled out-of-band by id.
#[derive(Debug, Clone, Default)]
pub struct RebuildIndexResult {
    pub message: String,
    pub task_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for ty in [
            FieldType::String,
            FieldType::Uint64,
            FieldType::Array,
            FieldType::Vector,
        ] {
            assert_eq!(FieldType::from_wire(ty.as_str()), ty);
        }
        for ty in [
            IndexType::Flat,
            IndexType::Hnsw,
            IndexType::IvfFlat,
            IndexType::IvfPq,
            IndexType::IvfSq4,
            IndexType::IvfSq8,
            IndexType::IvfSq16,
            IndexType::PrimaryKey,
            IndexType::Filter,
        ] {
            assert_eq!(IndexType::from_wire(ty.as_str()), ty);
        }
        for metric in [MetricType::Cosine, MetricType::L2, MetricType::Ip] {
            assert_eq!(MetricType::from_wire(metric.as_str()), metric);
        }
    }

    #[test]
    fn unknown_wire_values_fall_back() {
        assert_eq!(FieldType::from_wire("json"), FieldType::String);
        assert_eq!(IndexType::from_wire("BTREE"), IndexType::Filter);
        assert_eq!(MetricType::from_wire("HAMMING"), MetricType::Cosine);
    }
}
