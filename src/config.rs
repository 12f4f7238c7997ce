use std::time::Duration;

use tonic::transport::Endpoint;

/// Maximum encoded/decoded message size accepted on the channel.
pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Read visibility of prior writes, attached to query and search calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadConsistency {
    #[default]
    Eventual,
    Strong,
}

impl ReadConsistency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadConsistency::Eventual => "eventualConsistency",
            ReadConsistency::Strong => "strongConsistency",
        }
    }
}

/// Client-level options supplied at construction.
///
/// `timeout` doubles as the connection-establishment bound and the default
/// per-call deadline; it stays mutable through
/// [`VectorDbClient::set_timeout`](crate::VectorDbClient::set_timeout).
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub read_consistency: ReadConsistency,
    pub channel: ChannelConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            read_consistency: ReadConsistency::Eventual,
            channel: ChannelConfig::default(),
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_read_consistency(mut self, mode: ReadConsistency) -> Self {
        self.read_consistency = mode;
        self
    }

    pub fn with_channel(mut self, channel: ChannelConfig) -> Self {
        self.channel = channel;
        self
    }
}

/// HTTP/2 and TCP tuning for the underlying channel.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub http2_keep_alive_interval: Option<Duration>,
    pub keep_alive_timeout: Duration,
    pub keep_alive_while_idle: bool,
    pub tcp_nodelay: bool,
    pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            http2_keep_alive_interval: Some(Duration::from_secs(30)),
            keep_alive_timeout: Duration::from_secs(10),
            keep_alive_while_idle: true,
            tcp_nodelay: true,
            tcp_keepalive: Some(Duration::from_secs(30)),
        }
    }
}

impl ChannelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable HTTP/2 keep-alive probing.
    pub fn without_keep_alive(mut self) -> Self {
        self.http2_keep_alive_interval = None;
        self
    }

    pub(crate) fn apply_to_endpoint(
        &self,
        mut endpoint: Endpoint,
        connect_timeout: Duration,
    ) -> Endpoint {
        if let Some(interval) = self.http2_keep_alive_interval {
            endpoint = endpoint.http2_keep_alive_interval(interval);
        }
        endpoint = endpoint
            .keep_alive_timeout(self.keep_alive_timeout)
            .keep_alive_while_idle(self.keep_alive_while_idle)
            .connect_timeout(connect_timeout)
            .tcp_nodelay(self.tcp_nodelay);
        if let Some(keepalive) = self.tcp_keepalive {
            endpoint = endpoint.tcp_keepalive(Some(keepalive));
        }
        endpoint
    }
}
