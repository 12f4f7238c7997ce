//! Connection state shared by every operation: the channel, credentials and
//! the per-call deadline.

use std::future::Future;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

use crate::config::{ClientOptions, MAX_MESSAGE_SIZE, ReadConsistency};
use crate::error::{ClientError, ClientResult};
use crate::proto::vdb::v1::search_engine_client::SearchEngineClient;

pub(crate) type EngineStub = SearchEngineClient<InterceptedService<Channel, AuthInterceptor>>;

/// Injects the account credential into every outgoing request.
#[derive(Clone, Debug)]
pub struct AuthInterceptor {
    header_value: String,
}

impl AuthInterceptor {
    pub fn new(username: &str, key: &str) -> Self {
        Self {
            header_value: format!("Bearer account={username}&api_key={key}"),
        }
    }
}

impl tonic::service::Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request.metadata_mut().insert(
            "authorization",
            self.header_value
                .parse()
                .map_err(|_| Status::internal("Invalid auth header"))?,
        );
        Ok(request)
    }
}

/// A connection to one endpoint. Cheap to share behind the facade; closing
/// it fails every later call with [`ClientError::ConnectionClosed`].
#[derive(Debug)]
pub(crate) struct Session {
    channel: RwLock<Option<Channel>>,
    auth: AuthInterceptor,
    timeout_ms: AtomicU64,
    read_consistency: ReadConsistency,
}

fn normalize_url(url: &str) -> String {
    if url.contains("://") {
        url.to_owned()
    } else {
        format!("http://{url}")
    }
}

fn build_endpoint(url: &str, options: &ClientOptions) -> ClientResult<Endpoint> {
    let addr = normalize_url(url);
    let endpoint = Endpoint::from_shared(addr.clone()).map_err(|e| {
        tracing::error!(target: "vectordb_client", addr = %addr, error = ?e, "Invalid endpoint");
        ClientError::InvalidEndpoint {
            url: addr.clone(),
            source: e,
        }
    })?;
    Ok(options.channel.apply_to_endpoint(endpoint, options.timeout))
}

impl Session {
    fn from_channel(channel: Channel, username: &str, key: &str, options: &ClientOptions) -> Self {
        Self {
            channel: RwLock::new(Some(channel)),
            auth: AuthInterceptor::new(username, key),
            timeout_ms: AtomicU64::new(options.timeout.as_millis() as u64),
            read_consistency: options.read_consistency,
        }
    }

    /// Establishes the channel eagerly, failing fast on an unreachable
    /// endpoint.
    pub(crate) async fn connect(
        url: &str,
        username: &str,
        key: &str,
        options: &ClientOptions,
    ) -> ClientResult<Self> {
        let addr = normalize_url(url);
        let endpoint = build_endpoint(url, options)?;
        tracing::debug!(target: "vectordb_client", addr = %addr, "Connecting");
        let channel = endpoint.connect().await.map_err(|e| {
            tracing::error!(target: "vectordb_client", addr = %addr, error = ?e, "Connection failed");
            ClientError::ConnectionFailed {
                url: addr.clone(),
                source: e,
            }
        })?;
        Ok(Self::from_channel(channel, username, key, options))
    }

    /// Builds the channel without connecting; the transport dials on the
    /// first call instead.
    pub(crate) fn connect_lazy(
        url: &str,
        username: &str,
        key: &str,
        options: &ClientOptions,
    ) -> ClientResult<Self> {
        let endpoint = build_endpoint(url, options)?;
        tracing::debug!(
            target: "vectordb_client",
            addr = %normalize_url(url),
            "Creating lazy channel (connects on first request)"
        );
        Ok(Self::from_channel(
            endpoint.connect_lazy(),
            username,
            key,
            options,
        ))
    }

    pub(crate) fn set_timeout(&self, timeout: Duration) {
        self.timeout_ms
            .store(timeout.as_millis() as u64, Ordering::Relaxed);
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.load(Ordering::Relaxed))
    }

    pub(crate) fn read_consistency(&self) -> ReadConsistency {
        self.read_consistency
    }

    pub(crate) fn close(&self) {
        let mut guard = self.channel.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    fn stub(&self) -> ClientResult<EngineStub> {
        let guard = self.channel.read().unwrap_or_else(|e| e.into_inner());
        let channel = guard.as_ref().ok_or(ClientError::ConnectionClosed)?;
        Ok(
            SearchEngineClient::with_interceptor(channel.clone(), self.auth.clone())
                .max_decoding_message_size(MAX_MESSAGE_SIZE)
                .max_encoding_message_size(MAX_MESSAGE_SIZE),
        )
    }

    /// Runs one unary call under the effective deadline. The deadline is
    /// both attached to the request (grpc-timeout, enforced remotely) and
    /// raced locally, so an unresponsive transport cannot hang the caller.
    pub(crate) async fn invoke<Req, Resp, F, Fut>(
        &self,
        op: &'static str,
        timeout: Option<Duration>,
        message: Req,
        call: F,
    ) -> ClientResult<Resp>
    where
        F: FnOnce(EngineStub, Request<Req>) -> Fut,
        Fut: Future<Output = Result<tonic::Response<Resp>, Status>>,
    {
        let stub = self.stub()?;
        let deadline = timeout.unwrap_or_else(|| self.timeout());
        let mut request = Request::new(message);
        request.set_timeout(deadline);
        match tokio::time::timeout(deadline, call(stub, request)).await {
            Ok(Ok(response)) => Ok(response.into_inner()),
            Ok(Err(status)) => {
                tracing::debug!(target: "vectordb_client", op, code = ?status.code(), "Call failed");
                Err(ClientError::call(op, status.message().to_owned()))
            }
            Err(_) => Err(ClientError::call(
                op,
                format!("deadline exceeded after {}ms", deadline.as_millis()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn auth_header_carries_account_and_key() {
        let mut auth = AuthInterceptor::new("root", "secret-key");
        let request = auth.call(Request::new(())).unwrap();
        let value = request.metadata().get("authorization").unwrap();
        assert_eq!(value, "Bearer account=root&api_key=secret-key");
    }

    #[test]
    fn bare_addresses_default_to_http() {
        assert_eq!(normalize_url("10.0.0.1:8100"), "http://10.0.0.1:8100");
        assert_eq!(normalize_url("http://db.local:80"), "http://db.local:80");
        assert_eq!(normalize_url("https://db.local"), "https://db.local");
    }

    #[tokio::test]
    async fn closed_session_rejects_calls() {
        let session = Session::connect_lazy(
            "127.0.0.1:19530",
            "root",
            "key",
            &ClientOptions::default(),
        )
        .unwrap();
        session.close();
        // The stub is built before the closure runs, so the call body is
        // never reached on a closed session.
        let err = session
            .invoke("query documents", None, (), |_stub, _req| async {
                Ok::<tonic::Response<()>, Status>(tonic::Response::new(()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::ConnectionClosed));
    }
}
