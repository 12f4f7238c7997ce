use std::time::Duration;

use crate::conversions;
use crate::error::{ClientResult, ensure_ok};
use crate::filter::Filter;
use crate::model::{
    DeleteParams, DeleteResult, Document, QueryOptions, QueryResult, SearchOptions, SearchResult,
    SearchTarget, UpdateParams, UpdateResult, UpsertOptions, UpsertResult,
};
use crate::proto::vdb::v1 as pb;

use super::VectorDbClient;

impl VectorDbClient {
    /// Inserts documents, replacing any with the same id.
    pub async fn upsert(
        &self,
        database: &str,
        collection: &str,
        documents: &[Document],
        options: Option<&UpsertOptions>,
        timeout: Option<Duration>,
    ) -> ClientResult<UpsertResult> {
        let op = "upsert documents";
        let request = pb::UpsertRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
            build_index: options.map(|opts| opts.build_index).unwrap_or(true),
            documents: documents.iter().map(conversions::document_to_proto).collect(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.upsert(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(UpsertResult {
            message: response.msg,
            affected_count: response.affected_count,
        })
    }

    /// Retrieves documents by id and/or filter. Ids and filter intersect;
    /// with neither, offset/limit page through the whole collection.
    pub async fn query(
        &self,
        database: &str,
        collection: &str,
        document_ids: Vec<String>,
        options: &QueryOptions,
        timeout: Option<Duration>,
    ) -> ClientResult<QueryResult> {
        let op = "query documents";
        let request = pb::QueryRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
            query: Some(conversions::query_cond(options, document_ids)),
            read_consistency: self.session.read_consistency().as_str().to_owned(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.query(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(QueryResult {
            message: response.msg,
            documents: response
                .documents
                .into_iter()
                .map(|doc| conversions::document_from_proto(doc, false))
                .collect(),
            total: response.count,
        })
    }

    /// Similarity search. The result holds one scored list per query input,
    /// in input order.
    pub async fn search(
        &self,
        database: &str,
        collection: &str,
        target: &SearchTarget,
        options: &SearchOptions,
        timeout: Option<Duration>,
    ) -> ClientResult<SearchResult> {
        let op = "search documents";
        let request = pb::SearchRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
            search: Some(conversions::search_cond(target, options)),
            read_consistency: self.session.read_consistency().as_str().to_owned(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.search(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(SearchResult {
            message: response.msg,
            warning: response.warning,
            documents: response
                .results
                .into_iter()
                .map(|set| {
                    set.documents
                        .into_iter()
                        .map(|doc| conversions::document_from_proto(doc, true))
                        .collect()
                })
                .collect(),
        })
    }

    /// Applies a partial update to every document matched by the query
    /// scope. Absent update fields keep their stored values.
    pub async fn update(
        &self,
        database: &str,
        collection: &str,
        params: &UpdateParams,
        timeout: Option<Duration>,
    ) -> ClientResult<UpdateResult> {
        let op = "update documents";
        let update = Document {
            id: String::new(),
            vector: params.update_vector.clone(),
            fields: params.update_fields.clone(),
            score: None,
        };
        let request = pb::UpdateRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
            query: Some(pb::QueryCond {
                document_ids: params.query_ids.clone(),
                filter: params
                    .query_filter
                    .as_ref()
                    .map(|f| f.cond())
                    .unwrap_or_default(),
                ..Default::default()
            }),
            update: Some(conversions::document_to_proto(&update)),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.update(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(UpdateResult {
            message: response.msg,
            affected_count: response.affected_count,
        })
    }

    /// Deletes the documents matched by the intersection of id list and
    /// filter. Deleting a missing document is not an error.
    pub async fn delete(
        &self,
        database: &str,
        collection: &str,
        params: &DeleteParams,
        timeout: Option<Duration>,
    ) -> ClientResult<DeleteResult> {
        let op = "delete documents";
        let request = pb::DeleteRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
            query: Some(pb::QueryCond {
                document_ids: params.document_ids.clone(),
                filter: params.filter.as_ref().map(|f| f.cond()).unwrap_or_default(),
                limit: params.limit,
                ..Default::default()
            }),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.delete(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(DeleteResult {
            message: response.msg,
            affected_count: response.affected_count,
        })
    }

    /// Counts the documents matching the filter, all of them when no
    /// filter is given. Implemented over the query procedure, which
    /// reports the unpaged match count alongside its page.
    pub async fn count(
        &self,
        database: &str,
        collection: &str,
        filter: Option<&Filter>,
        timeout: Option<Duration>,
    ) -> ClientResult<u64> {
        let op = "count documents";
        let request = pb::QueryRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
            query: Some(pb::QueryCond {
                filter: filter.map(|f| f.cond()).unwrap_or_default(),
                limit: 1,
                ..Default::default()
            }),
            read_consistency: self.session.read_consistency().as_str().to_owned(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.query(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(response.count)
    }
}
