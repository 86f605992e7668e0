//! End-to-end tests against a listener on a real socket.

use std::time::Duration;

use echo_listener::{EchoConfig, EchoListener};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn hello_world_is_acknowledged() {
    let server = common::start_echo_server(EchoConfig::default()).await;

    let res = common::client()
        .post(server.url("/anything"))
        .body("hello world!!")
        .send()
        .await
        .expect("listener unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Received POST data");

    server.shutdown.trigger();
}

#[tokio::test]
async fn response_is_the_same_for_every_body() {
    let server = common::start_echo_server(EchoConfig::default()).await;
    let client = common::client();

    let bodies: Vec<Vec<u8>> = vec![
        br#"{"a":1}"#.to_vec(),
        b"not json".to_vec(),
        "héllo wörld ✓".as_bytes().to_vec(),
        vec![0xff, 0xfe, 0x00, 0x80],
        br#"{"key":"abc-10.0.0.1","block_time":86400,"realert":"false"}"#.to_vec(),
    ];

    for body in bodies {
        let res = client
            .post(server.url("/api/block/update"))
            .body(body.clone())
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK, "body {:?}", body);
        assert_eq!(res.text().await.unwrap(), "Received POST data");
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn repeated_requests_get_identical_responses() {
    let server = common::start_echo_server(EchoConfig::default()).await;
    let client = common::client();

    let mut answers = Vec::new();
    for _ in 0..2 {
        let res = client
            .post(server.url("/hook"))
            .body(r#"{"event":"ping"}"#)
            .send()
            .await
            .unwrap();
        answers.push((res.status(), res.text().await.unwrap()));
    }

    assert_eq!(answers[0], answers[1]);
    assert_eq!(answers[0].0, StatusCode::OK);

    server.shutdown.trigger();
}

#[tokio::test]
async fn other_methods_are_not_implemented() {
    let server = common::start_echo_server(EchoConfig::default()).await;

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(res.text().await.unwrap(), "Unsupported method ('GET')");

    let res = common::client().put(server.url("/x")).body("data").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);

    server.shutdown.trigger();
}

#[tokio::test]
async fn missing_content_length_is_rejected() {
    let server = common::start_echo_server(EchoConfig::default()).await;

    let response = common::raw_exchange(
        server.addr,
        b"POST /hook HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        false,
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 411"), "got {:?}", response);

    server.shutdown.trigger();
}

#[tokio::test]
async fn empty_body_is_acknowledged() {
    let server = common::start_echo_server(EchoConfig::default()).await;

    let response = common::raw_exchange(
        server.addr,
        b"POST /hook HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        false,
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "got {:?}", response);

    server.shutdown.trigger();
}

#[tokio::test]
async fn non_numeric_content_length_is_rejected() {
    let server = common::start_echo_server(EchoConfig::default()).await;

    let response = common::raw_exchange(
        server.addr,
        b"POST /hook HTTP/1.1\r\nHost: localhost\r\nContent-Length: abc\r\n\r\nabc",
        false,
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 400"), "got {:?}", response);

    server.shutdown.trigger();
}

#[tokio::test]
async fn truncated_body_is_never_acknowledged() {
    let server = common::start_echo_server(EchoConfig::default()).await;

    let response = common::raw_exchange(
        server.addr,
        b"POST /hook HTTP/1.1\r\nHost: localhost\r\nContent-Length: 10\r\n\r\nabc",
        true,
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 400"), "got {:?}", response);

    // The listener survives the broken connection.
    let res = common::client()
        .post(server.url("/hook"))
        .body("still here")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.shutdown.trigger();
}

#[tokio::test]
async fn stalled_body_times_out() {
    let mut config = EchoConfig::default();
    config.limits.request_timeout_secs = 1;
    let server = common::start_echo_server(config).await;

    let response = common::raw_exchange(
        server.addr,
        b"POST /hook HTTP/1.1\r\nHost: localhost\r\nContent-Length: 10\r\n\r\nabc",
        false,
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 408"), "got {:?}", response);

    server.shutdown.trigger();
}

#[tokio::test]
async fn stalled_client_does_not_block_others() {
    let server = common::start_echo_server(EchoConfig::default()).await;

    let mut stalled = tokio::net::TcpStream::connect(server.addr).await.unwrap();
    tokio::io::AsyncWriteExt::write_all(
        &mut stalled,
        b"POST /slow HTTP/1.1\r\nHost: localhost\r\nContent-Length: 100\r\n\r\npartial",
    )
    .await
    .unwrap();

    let res = tokio::time::timeout(
        Duration::from_secs(5),
        common::client().post(server.url("/fast")).body("quick").send(),
    )
    .await
    .expect("second client was blocked")
    .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    drop(stalled);
    server.shutdown.trigger();
}

#[tokio::test]
async fn shutdown_releases_the_port() {
    let server = common::start_echo_server(EchoConfig::default()).await;
    let addr = server.addr;

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());

    EchoListener::bind_addr(addr).await.expect("port still held");
}
