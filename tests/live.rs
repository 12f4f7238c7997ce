//! End-to-end scenario against a real deployment.
//!
//! Ignored by default; run with a reachable endpoint:
//!
//! ```text
//! VDB_URL=http://10.0.0.1:8100 VDB_USERNAME=root VDB_KEY=... \
//!     cargo test --test live -- --ignored
//! ```

use std::time::Duration;

use vectordb_client::{
    ClientOptions, DeleteParams, Document, FieldType, Filter, FilterIndex, IndexParams,
    IndexType, Indexes, MetricType, QueryOptions, RebuildIndexParams, SearchOptions,
    SearchTarget, UpdateParams, VectorDbClient, VectorIndex,
};

const DATABASE: &str = "client-live-test";
const COLLECTION: &str = "book-vector";

async fn connect() -> VectorDbClient {
    let url = std::env::var("VDB_URL").expect("VDB_URL must point at a live deployment");
    let username = std::env::var("VDB_USERNAME").unwrap_or_else(|_| "root".into());
    let key = std::env::var("VDB_KEY").expect("VDB_KEY must hold the api key");
    VectorDbClient::connect(
        &url,
        &username,
        &key,
        ClientOptions::new().with_timeout(Duration::from_secs(10)),
    )
    .await
    .expect("connect")
}

fn book_indexes() -> Indexes {
    Indexes {
        vector_index: vec![VectorIndex {
            field_name: "vector".into(),
            field_type: FieldType::Vector,
            index_type: IndexType::Hnsw,
            dimension: 3,
            metric_type: MetricType::Cosine,
            params: IndexParams {
                m: 16,
                ef_construction: 200,
                n_list: 0,
                n_probe: 0,
            },
            index_count: 0,
        }],
        filter_index: vec![
            FilterIndex::new("id", FieldType::String, IndexType::PrimaryKey),
            FilterIndex::new("bookName", FieldType::String, IndexType::Filter),
            FilterIndex {
                field_name: "tag".into(),
                field_type: FieldType::Array,
                index_type: IndexType::Filter,
                elem_type: Some(FieldType::String),
            },
        ],
    }
}

fn book(id: &str, vector: Vec<f32>, name: &str, page: u64, tags: &[&str]) -> Document {
    Document::new(id, vector)
        .with_field("bookName", name)
        .with_field("page", page)
        .with_field(
            "tag",
            tags.iter().map(|t| (*t).to_owned()).collect::<Vec<_>>(),
        )
}

#[tokio::test]
#[ignore = "needs a live deployment, see the module docs"]
async fn full_document_lifecycle() {
    let client = connect().await;

    client.create_database(DATABASE, None).await.expect("create database");
    let databases = client.list_databases(None).await.expect("list databases");
    assert!(databases.iter().any(|db| db.name == DATABASE));

    // A fresh collection with the standard book schema.
    let _ = client.drop_collection(DATABASE, COLLECTION, None).await;
    let created = client
        .create_collection(
            DATABASE,
            COLLECTION,
            1,
            2,
            "test collection for the client suite",
            &book_indexes(),
            None,
            None,
        )
        .await
        .expect("create collection");
    assert_eq!(created.collection_name, COLLECTION);

    let described = client
        .describe_collection(DATABASE, COLLECTION, None)
        .await
        .expect("describe collection");
    assert_eq!(described.indexes.vector_index[0].dimension, 3);
    assert_eq!(described.indexes.filter_index.len(), 3);

    let listed = client.list_collections(DATABASE, None).await.expect("list collections");
    assert!(listed.iter().any(|c| c.collection_name == COLLECTION));

    // Upsert five documents and read them back.
    let documents = vec![
        book("0001", vec![0.21, 0.32, 0.52], "western journey", 21, &["history", "poetry"]),
        book("0002", vec![0.21, 0.32, 0.52], "western journey", 22, &["history"]),
        book("0003", vec![0.21, 0.31, 0.51], "three kingdoms", 23, &["history"]),
        book("0004", vec![0.21, 0.33, 0.53], "three kingdoms", 24, &["war"]),
        book("0005", vec![0.21, 0.34, 0.54], "dream of mansions", 25, &["love", "family"]),
    ];
    let upserted = client
        .upsert(DATABASE, COLLECTION, &documents, None, None)
        .await
        .expect("upsert");
    assert_eq!(upserted.affected_count, 5);

    let total = client.count(DATABASE, COLLECTION, None, None).await.expect("count");
    assert_eq!(total, 5);

    let history = Filter::new(Filter::include("tag", &["history"]));
    let matched = client
        .count(DATABASE, COLLECTION, Some(&history), None)
        .await
        .expect("filtered count");
    assert_eq!(matched, 3);

    let page = client
        .query(
            DATABASE,
            COLLECTION,
            Vec::new(),
            &QueryOptions {
                filter: Some(history.clone()),
                retrieve_vector: true,
                output_fields: Vec::new(),
                offset: 1,
                limit: 2,
            },
            None,
        )
        .await
        .expect("query");
    assert_eq!(page.total, 3);
    assert_eq!(page.documents.len(), 2);
    assert!(!page.documents[0].vector.is_empty());

    // The three search modes.
    let by_vector = client
        .search(
            DATABASE,
            COLLECTION,
            &SearchTarget::Vectors(vec![vec![0.21, 0.32, 0.52]]),
            &SearchOptions {
                limit: 3,
                ..Default::default()
            },
            None,
        )
        .await
        .expect("search by vector");
    assert_eq!(by_vector.documents.len(), 1);
    assert!(!by_vector.documents[0].is_empty());
    assert!(by_vector.documents[0][0].score.is_some());

    let by_id = client
        .search(
            DATABASE,
            COLLECTION,
            &SearchTarget::DocumentIds(vec!["0001".into(), "0005".into()]),
            &SearchOptions {
                limit: 2,
                ..Default::default()
            },
            None,
        )
        .await
        .expect("search by id");
    assert_eq!(by_id.documents.len(), 2);

    // Update the intersection of an id list and a filter.
    let updated = client
        .update(
            DATABASE,
            COLLECTION,
            &UpdateParams {
                query_ids: vec!["0001".into(), "0003".into()],
                query_filter: Some(Filter::new("bookName=\"three kingdoms\"")),
                update_fields: [("page".to_owned(), 100u64.into())].into(),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("update");
    assert_eq!(updated.affected_count, 1);

    let deleted = client
        .delete(
            DATABASE,
            COLLECTION,
            &DeleteParams {
                document_ids: vec!["0001".into(), "0002".into()],
                filter: Some(Filter::new("bookName=\"western journey\"")),
                limit: 0,
            },
            None,
        )
        .await
        .expect("delete");
    assert_eq!(deleted.affected_count, 2);

    let rebuild = client
        .rebuild_index(
            DATABASE,
            COLLECTION,
            &RebuildIndexParams {
                drop_before_rebuild: false,
                throttle: 1,
            },
            None,
        )
        .await
        .expect("rebuild index");
    assert!(!rebuild.task_ids.is_empty());

    let truncated = client
        .truncate_collection(DATABASE, COLLECTION, None)
        .await
        .expect("truncate");
    assert!(truncated >= 3);

    client.drop_collection(DATABASE, COLLECTION, None).await.expect("drop collection");
    client.drop_database(DATABASE, None).await.expect("drop database");
}
