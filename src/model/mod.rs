//! Typed domain model exchanged with the service.

pub mod collection;
pub mod database;
pub mod document;
pub mod index;

pub use collection::{
    Collection, CreateCollectionOptions, Embedding, FilterIndex, IndexParams, IndexStatus,
    Indexes, VectorIndex,
};
pub use database::Database;
pub use document::{
    DeleteParams, DeleteResult, Document, Field, QueryOptions, QueryResult, SearchOptions,
    SearchParams, SearchResult, SearchTarget, UpdateParams, UpdateResult, UpsertOptions,
    UpsertResult,
};
pub use index::{FieldType, IndexType, MetricType, RebuildIndexParams, RebuildIndexResult};
