// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DatabaseRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(enumeration = "DataType", tag = "2")]
    pub dbtype: i32,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DatabaseInfo {
    #[prost(int64, tag = "1")]
    pub create_time: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DatabaseResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub databases: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(map = "string, message", tag = "4")]
    pub info: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        DatabaseInfo,
    >,
    #[prost(uint32, tag = "5")]
    pub affected_count: u32,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct IndexParams {
    #[prost(uint32, tag = "1")]
    pub m: u32,
    #[prost(uint32, tag = "2")]
    pub ef_construction: u32,
    #[prost(uint32, tag = "3")]
    pub nlist: u32,
    #[prost(uint32, tag = "4")]
    pub nprobe: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexColumn {
    #[prost(string, tag = "1")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub field_type: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub index_type: ::prost::alloc::string::String,
    #[prost(uint32, tag = "4")]
    pub dimension: u32,
    #[prost(string, tag = "5")]
    pub metric_type: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub params: ::core::option::Option<IndexParams>,
    #[prost(string, tag = "7")]
    pub field_element_type: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexStatus {
    #[prost(string, tag = "1")]
    pub status: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub progress: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub start_time: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmbeddingParams {
    #[prost(string, tag = "1")]
    pub field: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub vector_field: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub model_name: ::prost::alloc::string::String,
}
/// Also serves as the collection descriptor in list/describe responses.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCollectionRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub replica_num: u32,
    #[prost(uint32, tag = "4")]
    pub shard_num: u32,
    #[prost(uint64, tag = "5")]
    pub size: u64,
    #[prost(string, tag = "6")]
    pub create_time: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub description: ::prost::alloc::string::String,
    #[prost(map = "string, message", tag = "8")]
    pub indexes: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        IndexColumn,
    >,
    #[prost(message, optional, tag = "9")]
    pub index_status: ::core::option::Option<IndexStatus>,
    #[prost(string, repeated, tag = "10")]
    pub alias_list: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "11")]
    pub embedding_params: ::core::option::Option<EmbeddingParams>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCollectionResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub affected_count: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCollectionsRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCollectionsResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub collections: ::prost::alloc::vec::Vec<CreateCollectionRequest>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeCollectionRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeCollectionResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub collection: ::core::option::Option<CreateCollectionRequest>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TruncateCollectionRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TruncateCollectionResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub affected_count: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropCollectionRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropCollectionResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub affected_count: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StrArray {
    #[prost(string, repeated, tag = "1")]
    pub str_arr: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Field {
    #[prost(oneof = "field::OneofVal", tags = "1, 2, 3, 4")]
    pub oneof_val: ::core::option::Option<field::OneofVal>,
}
/// Nested message and enum types in `Field`.
pub mod field {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum OneofVal {
        #[prost(string, tag = "1")]
        ValStr(::prost::alloc::string::String),
        #[prost(uint64, tag = "2")]
        ValU64(u64),
        #[prost(double, tag = "3")]
        ValDouble(f64),
        #[prost(message, tag = "4")]
        ValStrArr(super::StrArray),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Document {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(float, repeated, tag = "2")]
    pub vector: ::prost::alloc::vec::Vec<f32>,
    #[prost(float, tag = "3")]
    pub score: f32,
    #[prost(map = "string, message", tag = "4")]
    pub fields: ::std::collections::HashMap<::prost::alloc::string::String, Field>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpsertRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub build_index: bool,
    #[prost(message, repeated, tag = "4")]
    pub documents: ::prost::alloc::vec::Vec<Document>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpsertResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub affected_count: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryCond {
    #[prost(string, repeated, tag = "1")]
    pub document_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "2")]
    pub filter: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub retrieve_vector: bool,
    #[prost(string, repeated, tag = "4")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, tag = "5")]
    pub offset: i64,
    #[prost(int64, tag = "6")]
    pub limit: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub query: ::core::option::Option<QueryCond>,
    #[prost(string, tag = "4")]
    pub read_consistency: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub documents: ::prost::alloc::vec::Vec<Document>,
    #[prost(uint64, tag = "4")]
    pub count: u64,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct SearchParams {
    #[prost(uint32, tag = "1")]
    pub nprobe: u32,
    #[prost(uint32, tag = "2")]
    pub ef: u32,
    #[prost(float, tag = "3")]
    pub radius: f32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VectorArray {
    #[prost(float, repeated, tag = "1")]
    pub vector: ::prost::alloc::vec::Vec<f32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchCond {
    #[prost(string, repeated, tag = "1")]
    pub document_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "2")]
    pub vectors: ::prost::alloc::vec::Vec<VectorArray>,
    #[prost(string, repeated, tag = "3")]
    pub embedding_items: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "4")]
    pub filter: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    pub params: ::core::option::Option<SearchParams>,
    #[prost(bool, tag = "6")]
    pub retrieve_vector: bool,
    #[prost(string, repeated, tag = "7")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, tag = "8")]
    pub limit: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub search: ::core::option::Option<SearchCond>,
    #[prost(string, tag = "4")]
    pub read_consistency: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResultSet {
    #[prost(message, repeated, tag = "1")]
    pub documents: ::prost::alloc::vec::Vec<Document>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub warning: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub results: ::prost::alloc::vec::Vec<SearchResultSet>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub query: ::core::option::Option<QueryCond>,
    #[prost(message, optional, tag = "4")]
    pub update: ::core::option::Option<Document>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub affected_count: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub query: ::core::option::Option<QueryCond>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub affected_count: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RebuildIndexRequest {
    #[prost(string, tag = "1")]
    pub database: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub collection: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub drop_before_rebuild: bool,
    #[prost(int32, tag = "4")]
    pub throttle: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RebuildIndexResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub task_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DataType {
    Base = 0,
}
impl DataType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Base => "BASE",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "BASE" => Some(Self::Base),
            _ => None,
        }
    }
}
include!("vdb.v1.tonic.rs");
// @@protoc_insertion_point(module)
