//! Failure-path tests that need no running service.

use std::time::Duration;

use vectordb_client::{
    ClientError, ClientOptions, Filter, QueryOptions, SearchOptions, SearchTarget, VectorDbClient,
};

fn short_timeout() -> ClientOptions {
    ClientOptions::new().with_timeout(Duration::from_millis(300))
}

#[tokio::test]
async fn eager_connect_fails_on_unreachable_endpoint() {
    // Port 1 is reserved; nothing listens there.
    let err = VectorDbClient::connect("http://127.0.0.1:1", "root", "key", short_timeout())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::ConnectionFailed { .. }));
    assert_eq!(err.code(), -1);
}

#[tokio::test]
async fn malformed_url_is_rejected_before_dialing() {
    let err = VectorDbClient::connect_lazy("http://bad host:8100", "root", "key", short_timeout())
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
}

#[tokio::test]
async fn scheme_is_optional() {
    // A bare host:port address gets an implicit http scheme.
    assert!(VectorDbClient::connect_lazy("127.0.0.1:8100", "root", "key", short_timeout()).is_ok());
}

#[tokio::test]
async fn calls_after_close_fail_without_panicking() {
    let client =
        VectorDbClient::connect_lazy("http://127.0.0.1:1", "root", "key", short_timeout()).unwrap();
    client.close();

    let err = client.list_databases(None).await.unwrap_err();
    assert!(matches!(err, ClientError::ConnectionClosed));
    assert_eq!(err.to_string(), "connection closed");

    let err = client
        .search(
            "db-test",
            "book-vector",
            &SearchTarget::Vectors(vec![vec![0.1, 0.2, 0.3]]),
            &SearchOptions::default(),
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), -1);
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn failed_calls_name_their_operation() {
    let client =
        VectorDbClient::connect_lazy("http://127.0.0.1:1", "root", "key", short_timeout()).unwrap();

    let err = client
        .search(
            "db-test",
            "book-vector",
            &SearchTarget::Vectors(vec![vec![0.1, 0.2, 0.3]]),
            &SearchOptions::default(),
            None,
        )
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Fail to search documents: "));
    assert_eq!(err.code(), -1);
}

#[tokio::test]
async fn one_failed_call_does_not_poison_the_client() {
    let client =
        VectorDbClient::connect_lazy("http://127.0.0.1:1", "root", "key", short_timeout()).unwrap();

    let first = client
        .query(
            "db-test",
            "book-vector",
            vec!["0001".into()],
            &QueryOptions::default(),
            None,
        )
        .await
        .unwrap_err();
    assert!(first.to_string().starts_with("Fail to query documents: "));

    // The channel stays usable for further (equally failing) calls.
    let second = client
        .count("db-test", "book-vector", Some(&Filter::new("pages > 100")), None)
        .await
        .unwrap_err();
    assert!(second.to_string().starts_with("Fail to count documents: "));
}

#[tokio::test]
async fn per_call_timeout_overrides_the_default() {
    let client = VectorDbClient::connect_lazy(
        "http://10.255.255.1:8100", // non-routable, the dial hangs
        "root",
        "key",
        ClientOptions::new().with_timeout(Duration::from_secs(60)),
    )
    .unwrap();

    let started = std::time::Instant::now();
    let err = client
        .drop_database("db-test", Some(Duration::from_millis(200)))
        .await
        .unwrap_err();
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(err.to_string().starts_with("Fail to drop database: "));
}
