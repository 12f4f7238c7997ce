//! The typed operation facade over the search-engine service.

mod collection;
mod database;
mod document;
mod index;

use std::time::Duration;

use crate::config::ClientOptions;
use crate::error::ClientResult;
use crate::session::Session;

/// Client for a remote vector-search store.
///
/// One client owns one multiplexed channel; calls may be issued
/// concurrently from multiple tasks. All operations are grouped on this
/// type, split across submodules by the resource they act on.
///
/// ```ignore
/// let client = VectorDbClient::connect(
///     "http://10.0.0.1:8100",
///     "root",
///     "api-key",
///     ClientOptions::default(),
/// )
/// .await?;
/// let databases = client.list_databases(None).await?;
/// ```
#[derive(Debug)]
pub struct VectorDbClient {
    session: Session,
}

impl VectorDbClient {
    /// Connects eagerly; fails if the endpoint is unreachable within the
    /// configured timeout.
    pub async fn connect(
        url: &str,
        username: &str,
        key: &str,
        options: ClientOptions,
    ) -> ClientResult<Self> {
        let session = Session::connect(url, username, key, &options).await?;
        Ok(Self { session })
    }

    /// Builds the client without dialing; the connection is made on the
    /// first call.
    pub fn connect_lazy(
        url: &str,
        username: &str,
        key: &str,
        options: ClientOptions,
    ) -> ClientResult<Self> {
        let session = Session::connect_lazy(url, username, key, &options)?;
        Ok(Self { session })
    }

    /// Changes the default deadline for later calls. In-flight calls keep
    /// the deadline they started with.
    pub fn set_timeout(&self, timeout: Duration) {
        self.session.set_timeout(timeout);
    }

    /// Drops the channel. Every later call fails with
    /// [`crate::ClientError::ConnectionClosed`].
    pub fn close(&self) {
        self.session.close();
    }
}
