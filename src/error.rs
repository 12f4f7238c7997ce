use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the client.
///
/// Connection errors are fatal and only occur at construction time. Per-call
/// failures are all reported as [`ClientError::Call`], whether the transport
/// failed, the deadline expired, or the service answered with a nonzero
/// response code; `code` is -1 for transport-level failures and the remote
/// code otherwise. No call failure affects any other in-flight call.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured endpoint address could not be parsed.
    #[error("Invalid endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        source: tonic::transport::Error,
    },

    /// The channel could not be established within the configured timeout.
    #[error("Failed to connect to {url}: {source}")]
    ConnectionFailed {
        url: String,
        source: tonic::transport::Error,
    },

    /// A call was issued after the connection was closed.
    #[error("connection closed")]
    ConnectionClosed,

    /// A single remote call failed.
    #[error("Fail to {op}: {message}")]
    Call {
        op: &'static str,
        code: i32,
        message: String,
    },
}

impl ClientError {
    pub(crate) fn call(op: &'static str, message: impl Into<String>) -> Self {
        ClientError::Call {
            op,
            code: -1,
            message: message.into(),
        }
    }

    pub(crate) fn remote(op: &'static str, code: i32, message: impl Into<String>) -> Self {
        ClientError::Call {
            op,
            code,
            message: message.into(),
        }
    }

    /// Remote response code of an application-level failure, -1 for every
    /// transport or local failure.
    pub fn code(&self) -> i32 {
        match self {
            ClientError::Call { code, .. } => *code,
            _ => -1,
        }
    }
}

/// Rejects a response whose code marks an application-level failure.
pub(crate) fn ensure_ok(op: &'static str, code: i32, msg: &str) -> ClientResult<()> {
    if code != 0 {
        return Err(ClientError::remote(op, code, msg));
    }
    Ok(())
}
