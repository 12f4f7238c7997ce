use std::time::Duration;

use crate::error::{ClientResult, ensure_ok};
use crate::model::{RebuildIndexParams, RebuildIndexResult};
use crate::proto::vdb::v1 as pb;

use super::VectorDbClient;

impl VectorDbClient {
    /// Starts an asynchronous rebuild of the collection's indexes and
    /// returns the task ids to poll for completion.
    pub async fn rebuild_index(
        &self,
        database: &str,
        collection: &str,
        params: &RebuildIndexParams,
        timeout: Option<Duration>,
    ) -> ClientResult<RebuildIndexResult> {
        let op = "rebuild index";
        let request = pb::RebuildIndexRequest {
            database: database.to_owned(),
            collection: collection.to_owned(),
            drop_before_rebuild: params.drop_before_rebuild,
            throttle: params.throttle,
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.rebuild_index(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(RebuildIndexResult {
            message: response.msg,
            task_ids: response.task_ids,
        })
    }
}
