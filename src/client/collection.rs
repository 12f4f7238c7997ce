use std::time::Duration;

use crate::conversions;
use crate::error::{ClientError, ClientResult, ensure_ok};
use crate::model::{Collection, CreateCollectionOptions, Indexes};
use crate::proto::vdb::v1 as pb;

use super::VectorDbClient;

impl VectorDbClient {
    /// Creates a collection. The index layout is fixed at creation time;
    /// the returned value echoes the submitted definition since the
    /// service acknowledges without a descriptor.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_collection(
        &self,
        database: &str,
        collection: &str,
        shard_num: u32,
        replica_num: u32,
        description: &str,
        indexes: &Indexes,
        options: Option<&CreateCollectionOptions>,
        timeout: Option<Duration>,
    ) -> ClientResult<Collection> {
        let op = "create collection";
        let request = conversions::create_collection_request(
            database,
            collection,
            shard_num,
            replica_num,
            description,
            indexes,
            options,
        );
        let submitted = request.clone();
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.create_collection(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        let mut created = conversions::collection_from_proto(submitted);
        created.embedding = options.and_then(|opts| opts.embedding.clone());
        Ok(created)
    }

    /// Lists every collection in the database with its full descriptor.
    pub async fn list_collections(
        &self,
        database: &str,
        timeout: Option<Duration>,
    ) -> ClientResult<Vec<Collection>> {
        let op = "list collections";
        let request = pb::ListCollectionsRequest {
            database: database.to_owned(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.list_collections(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(response
            .collections
            .into_iter()
            .map(conversions::collection_from_proto)
            .collect())
    }

    /// Fetches a single collection descriptor.
    pub async fn describe_collection(
        &self,
        database: &str,
        collection: &str,
        timeout: Option<Duration>,
    ) -> ClientResult<Collection> {
        let op = "describe collection";
        let request = pb::DescribeCollectionRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.describe_collection(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        let descriptor = response
            .collection
            .ok_or_else(|| ClientError::call(op, "no collection in response"))?;
        Ok(conversions::collection_from_proto(descriptor))
    }

    /// Removes all documents but keeps the collection and its index
    /// definitions; returns the number of removed documents.
    pub async fn truncate_collection(
        &self,
        database: &str,
        collection: &str,
        timeout: Option<Duration>,
    ) -> ClientResult<u32> {
        let op = "truncate collection";
        let request = pb::TruncateCollectionRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.truncate_collection(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(response.affected_count)
    }

    /// Drops a collection and its documents.
    pub async fn drop_collection(
        &self,
        database: &str,
        collection: &str,
        timeout: Option<Duration>,
    ) -> ClientResult<u32> {
        let op = "drop collection";
        let request = pb::DropCollectionRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.drop_collection(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(response.affected_count)
    }
}
