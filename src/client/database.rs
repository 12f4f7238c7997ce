use std::time::Duration;

use crate::error::{ClientResult, ensure_ok};
use crate::model::Database;
use crate::proto::vdb::v1 as pb;

use super::VectorDbClient;

impl VectorDbClient {
    /// Creates a database. Succeeds even when it already exists.
    pub async fn create_database(
        &self,
        name: &str,
        timeout: Option<Duration>,
    ) -> ClientResult<Database> {
        let op = "create database";
        let request = pb::DatabaseRequest {
            database: name.to_owned(),
            dbtype: pb::DataType::Base as i32,
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.create_database(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(Database::new(name))
    }

    /// Lists all databases visible to the account, with creation times
    /// where the server reports them.
    pub async fn list_databases(&self, timeout: Option<Duration>) -> ClientResult<Vec<Database>> {
        let op = "list databases";
        let request = pb::DatabaseRequest::default();
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.list_databases(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(response
            .databases
            .into_iter()
            .map(|name| {
                let create_time = response.info.get(&name).map(|i| i.create_time).unwrap_or(-1);
                Database { name, create_time }
            })
            .collect())
    }

    /// Drops a database and everything in it; returns the number of
    /// affected collections.
    pub async fn drop_database(
        &self,
        name: &str,
        timeout: Option<Duration>,
    ) -> ClientResult<u32> {
        let op = "drop database";
        let request = pb::DatabaseRequest {
            database: name.to_owned(),
            dbtype: pb::DataType::Base as i32,
        };
        let response = self
            .session
            .invoke(op, timeout, request, |mut stub, req| async move {
                stub.drop_database(req).await
            })
            .await?;
        ensure_ok(op, response.code, &response.msg)?;
        Ok(response.affected_count)
    }
}
