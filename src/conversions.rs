//! Pure conversions between the public model types and the wire messages.
//!
//! Decoding is deliberately lenient: unknown wire strings fall back to a
//! default variant instead of failing, so a newer server never breaks an
//! older client.

use std::collections::HashMap;

use crate::model::{
    Collection, CreateCollectionOptions, Document, Embedding, Field, FieldType, FilterIndex,
    IndexParams, IndexStatus, IndexType, Indexes, MetricType, QueryOptions, SearchOptions,
    SearchTarget, VectorIndex,
};
use crate::proto::vdb::v1 as pb;

pub(crate) fn field_to_proto(field: &Field) -> pb::Field {
    let oneof_val = match field {
        Field::Empty => None,
        Field::Text(v) => Some(pb::field::OneofVal::ValStr(v.clone())),
        Field::Uint64(v) => Some(pb::field::OneofVal::ValU64(*v)),
        Field::Double(v) => Some(pb::field::OneofVal::ValDouble(*v)),
        Field::TextList(v) => Some(pb::field::OneofVal::ValStrArr(pb::StrArray {
            str_arr: v.clone(),
        })),
    };
    pb::Field { oneof_val }
}

pub(crate) fn field_from_proto(field: pb::Field) -> Field {
    match field.oneof_val {
        None => Field::Empty,
        Some(pb::field::OneofVal::ValStr(v)) => Field::Text(v),
        Some(pb::field::OneofVal::ValU64(v)) => Field::Uint64(v),
        Some(pb::field::OneofVal::ValDouble(v)) => Field::Double(v),
        Some(pb::field::OneofVal::ValStrArr(v)) => Field::TextList(v.str_arr),
    }
}

pub(crate) fn document_to_proto(doc: &Document) -> pb::Document {
    pb::Document {
        id: doc.id.clone(),
        vector: doc.vector.clone(),
        score: doc.score.unwrap_or(0.0),
        fields: doc
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field_to_proto(field)))
            .collect(),
    }
}

/// `scored` is true for search responses, where the score column carries a
/// real similarity value; query responses leave it unset.
pub(crate) fn document_from_proto(doc: pb::Document, scored: bool) -> Document {
    Document {
        id: doc.id,
        vector: doc.vector,
        score: scored.then_some(doc.score),
        fields: doc
            .fields
            .into_iter()
            .map(|(name, field)| (name, field_from_proto(field)))
            .collect(),
    }
}

fn vector_index_to_proto(index: &VectorIndex) -> pb::IndexColumn {
    pb::IndexColumn {
        field_name: index.field_name.clone(),
        field_type: FieldType::Vector.as_str().to_owned(),
        index_type: index.index_type.as_str().to_owned(),
        dimension: index.dimension,
        metric_type: index.metric_type.as_str().to_owned(),
        params: Some(pb::IndexParams {
            m: index.params.m,
            ef_construction: index.params.ef_construction,
            nlist: index.params.n_list,
            nprobe: index.params.n_probe,
        }),
        field_element_type: String::new(),
    }
}

fn filter_index_to_proto(index: &FilterIndex) -> pb::IndexColumn {
    pb::IndexColumn {
        field_name: index.field_name.clone(),
        field_type: index.field_type.as_str().to_owned(),
        index_type: index.index_type.as_str().to_owned(),
        dimension: 0,
        metric_type: String::new(),
        params: None,
        field_element_type: index
            .elem_type
            .map(|ty| ty.as_str().to_owned())
            .unwrap_or_default(),
    }
}

pub(crate) fn indexes_to_proto(indexes: &Indexes) -> HashMap<String, pb::IndexColumn> {
    let mut columns = HashMap::new();
    for index in &indexes.vector_index {
        columns.insert(index.field_name.clone(), vector_index_to_proto(index));
    }
    for index in &indexes.filter_index {
        columns.insert(index.field_name.clone(), filter_index_to_proto(index));
    }
    columns
}

pub(crate) fn indexes_from_proto(
    columns: HashMap<String, pb::IndexColumn>,
    document_count: u64,
) -> Indexes {
    let mut indexes = Indexes::default();
    for column in columns.into_values() {
        if column.field_type == FieldType::Vector.as_str() {
            let params = column.params.unwrap_or_default();
            indexes.vector_index.push(VectorIndex {
                field_name: column.field_name,
                field_type: FieldType::Vector,
                index_type: IndexType::from_wire(&column.index_type),
                dimension: column.dimension,
                metric_type: MetricType::from_wire(&column.metric_type),
                params: IndexParams {
                    m: params.m,
                    ef_construction: params.ef_construction,
                    n_list: params.nlist,
                    n_probe: params.nprobe,
                },
                index_count: document_count,
            });
        } else if column.field_type == FieldType::Array.as_str() {
            indexes.filter_index.push(FilterIndex {
                field_name: column.field_name,
                field_type: FieldType::Array,
                index_type: IndexType::from_wire(&column.index_type),
                elem_type: Some(FieldType::from_wire(&column.field_element_type)),
            });
        } else {
            indexes.filter_index.push(FilterIndex {
                field_name: column.field_name,
                field_type: FieldType::from_wire(&column.field_type),
                index_type: IndexType::from_wire(&column.index_type),
                elem_type: None,
            });
        }
    }
    indexes
}

pub(crate) fn embedding_to_proto(embedding: &Embedding) -> pb::EmbeddingParams {
    pb::EmbeddingParams {
        field: embedding.field.clone(),
        vector_field: embedding.vector_field.clone(),
        model_name: embedding.model.clone(),
    }
}

/// The descriptor message does not carry the enabled flag, so a decoded
/// embedding always reports disabled until the service confirms otherwise.
pub(crate) fn embedding_from_proto(params: pb::EmbeddingParams) -> Embedding {
    Embedding {
        field: params.field,
        vector_field: params.vector_field,
        model: params.model_name,
        enabled: false,
    }
}

pub(crate) fn create_collection_request(
    database: &str,
    collection: &str,
    shard_num: u32,
    replica_num: u32,
    description: &str,
    indexes: &Indexes,
    options: Option<&CreateCollectionOptions>,
) -> pb::CreateCollectionRequest {
    pb::CreateCollectionRequest {
        database: database.to_owned(),
        collection: collection.to_owned(),
        replica_num,
        shard_num,
        size: 0,
        create_time: String::new(),
        description: description.to_owned(),
        indexes: indexes_to_proto(indexes),
        index_status: None,
        alias_list: Vec::new(),
        embedding_params: options
            .and_then(|opts| opts.embedding.as_ref())
            .map(embedding_to_proto),
    }
}

pub(crate) fn collection_from_proto(descriptor: pb::CreateCollectionRequest) -> Collection {
    let status = descriptor.index_status.unwrap_or_default();
    Collection {
        database: descriptor.database,
        collection_name: descriptor.collection,
        document_count: descriptor.size as i64,
        alias: descriptor.alias_list,
        shard_num: descriptor.shard_num,
        replica_num: descriptor.replica_num,
        indexes: indexes_from_proto(descriptor.indexes, descriptor.size),
        index_status: IndexStatus {
            status: status.status,
            progress: status.progress,
            start_time: status.start_time,
        },
        embedding: descriptor.embedding_params.map(embedding_from_proto),
        description: descriptor.description,
        size: descriptor.size,
        create_time: descriptor.create_time,
    }
}

pub(crate) fn query_cond(options: &QueryOptions, document_ids: Vec<String>) -> pb::QueryCond {
    pb::QueryCond {
        document_ids,
        filter: options
            .filter
            .as_ref()
            .map(|f| f.cond())
            .unwrap_or_default(),
        retrieve_vector: options.retrieve_vector,
        output_fields: options.output_fields.clone(),
        offset: options.offset,
        limit: options.limit,
    }
}

pub(crate) fn search_cond(target: &SearchTarget, options: &SearchOptions) -> pb::SearchCond {
    let mut cond = pb::SearchCond {
        document_ids: Vec::new(),
        vectors: Vec::new(),
        embedding_items: Vec::new(),
        filter: options
            .filter
            .as_ref()
            .map(|f| f.cond())
            .unwrap_or_default(),
        params: options.params.map(|p| pb::SearchParams {
            nprobe: p.nprobe,
            ef: p.ef,
            radius: p.radius,
        }),
        retrieve_vector: options.retrieve_vector,
        output_fields: options.output_fields.clone(),
        limit: options.limit,
    };
    match target {
        SearchTarget::Vectors(vectors) => {
            cond.vectors = vectors
                .iter()
                .map(|vector| pb::VectorArray {
                    vector: vector.clone(),
                })
                .collect();
        }
        SearchTarget::DocumentIds(ids) => cond.document_ids = ids.clone(),
        SearchTarget::Text(items) => cond.embedding_items = items.clone(),
    }
    cond
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

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

    #[test]
    fn field_round_trip_covers_every_variant() {
        let fields = [
            Field::Empty,
            Field::Text("expert".into()),
            Field::Uint64(21),
            Field::Double(3.5),
            Field::TextList(vec!["history".into(), "poetry".into()]),
        ];
        for field in fields {
            assert_eq!(field_from_proto(field_to_proto(&field)), field);
        }
    }

    #[test]
    fn empty_oneof_decodes_to_empty_field() {
        assert_eq!(
            field_from_proto(pb::Field { oneof_val: None }),
            Field::Empty
        );
    }

    #[test]
    fn document_score_depends_on_context() {
        let wire = pb::Document {
            id: "0001".into(),
            vector: vec![0.1, 0.2, 0.3],
            score: 0.98,
            fields: HashMap::new(),
        };
        let from_search = document_from_proto(wire.clone(), true);
        assert_eq!(from_search.score, Some(0.98));
        let from_query = document_from_proto(wire, false);
        assert_eq!(from_query.score, None);
    }

    #[test]
    fn index_map_round_trips_through_descriptor() {
        let indexes = book_indexes();
        let columns = indexes_to_proto(&indexes);
        assert_eq!(columns.len(), 4);
        assert_eq!(columns["vector"].field_type, "vector");
        assert_eq!(columns["vector"].metric_type, "COSINE");
        assert_eq!(columns["id"].index_type, "primaryKey");
        assert_eq!(columns["tag"].field_element_type, "string");

        let decoded = indexes_from_proto(columns, 0);
        assert_eq!(decoded.vector_index, indexes.vector_index);
        let mut filter_names: Vec<_> = decoded
            .filter_index
            .iter()
            .map(|i| i.field_name.as_str())
            .collect();
        filter_names.sort_unstable();
        assert_eq!(filter_names, ["bookName", "id", "tag"]);
        let tag = decoded
            .filter_index
            .iter()
            .find(|i| i.field_name == "tag")
            .unwrap();
        assert_eq!(tag.elem_type, Some(FieldType::String));
    }

    #[test]
    fn descriptor_size_feeds_document_and_index_counts() {
        let descriptor = pb::CreateCollectionRequest {
            database: "db-test".into(),
            collection: "book-vector".into(),
            replica_num: 2,
            shard_num: 1,
            size: 42,
            create_time: "2024-01-01 00:00:00".into(),
            description: "books".into(),
            indexes: indexes_to_proto(&book_indexes()),
            index_status: Some(pb::IndexStatus {
                status: "ready".into(),
                progress: String::new(),
                start_time: String::new(),
            }),
            alias_list: vec!["books".into()],
            embedding_params: None,
        };
        let collection = collection_from_proto(descriptor);
        assert_eq!(collection.collection_name, "book-vector");
        assert_eq!(collection.document_count, 42);
        assert_eq!(collection.indexes.vector_index[0].index_count, 42);
        assert_eq!(collection.index_status.status, "ready");
        assert_eq!(collection.alias, vec!["books".to_owned()]);
        assert!(collection.embedding.is_none());
    }

    #[test]
    fn decoded_embedding_starts_disabled() {
        let embedding = embedding_from_proto(pb::EmbeddingParams {
            field: "text".into(),
            vector_field: "vector".into(),
            model_name: "bge-base-zh".into(),
        });
        assert_eq!(embedding.model, "bge-base-zh");
        assert!(!embedding.enabled);
    }

    #[test]
    fn query_cond_carries_filter_and_bounds() {
        let options = QueryOptions {
            filter: Some(Filter::new("bookName = \"sanguo\"")),
            retrieve_vector: true,
            output_fields: vec!["bookName".into()],
            offset: 10,
            limit: 5,
        };
        let cond = query_cond(&options, vec!["0001".into()]);
        assert_eq!(cond.document_ids, vec!["0001".to_owned()]);
        assert_eq!(cond.filter, "bookName = \"sanguo\"");
        assert!(cond.retrieve_vector);
        assert_eq!(cond.offset, 10);
        assert_eq!(cond.limit, 5);
    }

    #[test]
    fn search_cond_uses_exactly_one_input_mode() {
        let options = SearchOptions {
            limit: 3,
            ..Default::default()
        };

        let by_vectors = search_cond(
            &SearchTarget::Vectors(vec![vec![0.1, 0.2, 0.3]]),
            &options,
        );
        assert_eq!(by_vectors.vectors.len(), 1);
        assert!(by_vectors.document_ids.is_empty());
        assert!(by_vectors.embedding_items.is_empty());

        let by_ids = search_cond(
            &SearchTarget::DocumentIds(vec!["0001".into(), "0002".into()]),
            &options,
        );
        assert!(by_ids.vectors.is_empty());
        assert_eq!(by_ids.document_ids.len(), 2);

        let by_text = search_cond(&SearchTarget::Text(vec!["roman history".into()]), &options);
        assert!(by_text.vectors.is_empty());
        assert_eq!(by_text.embedding_items, vec!["roman history".to_owned()]);
    }
}
