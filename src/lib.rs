//! # VectorDB Client
//!
//! Async gRPC client for a remote vector-search store: databases hold
//! collections, collections hold schema-flexible documents with a dense
//! vector column, and the service answers exact lookups, filtered scans
//! and similarity search over them.
//!
//! ## Quick Start
//! ```ignore
//! use vectordb_client::{ClientOptions, VectorDbClient};
//!
//! let client = VectorDbClient::connect(
//!     "http://10.0.0.1:8100",
//!     "root",
//!     "api-key",
//!     ClientOptions::default(),
//! )
//! .await?;
//!
//! client.create_database("db-test", None).await?;
//! ```
//!
//! ## Filters
//! ```
//! use vectordb_client::Filter;
//!
//! let filter = Filter::new(Filter::include("tag", &["poetry"]));
//! filter.and("pages > 100");
//! assert_eq!(filter.cond(), "tag include (\"poetry\") and (pages > 100)");
//! ```

pub mod client;
pub mod config;
mod conversions;
pub mod error;
pub mod filter;
pub mod model;
pub mod proto;
mod session;

pub use client::VectorDbClient;
pub use config::{ChannelConfig, ClientOptions, MAX_MESSAGE_SIZE, ReadConsistency};
pub use error::{ClientError, ClientResult};
pub use filter::Filter;
pub use model::{
    Collection, CreateCollectionOptions, Database, DeleteParams, DeleteResult, Document,
    Embedding, Field, FieldType, FilterIndex, IndexParams, IndexStatus, IndexType, Indexes,
    MetricType, QueryOptions, QueryResult, RebuildIndexParams, RebuildIndexResult, SearchOptions,
    SearchParams, SearchResult, SearchTarget, UpdateParams, UpdateResult, UpsertOptions,
    UpsertResult, VectorIndex,
};
pub use session::AuthInterceptor;
