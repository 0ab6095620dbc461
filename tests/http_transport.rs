//! Integration tests for `RelayerHttp` against a local single-shot HTTP responder.
//!
//! Each test binds a TCP listener on an ephemeral port, answers exactly one
//! request with a canned status and body, and hands back the request it saw.

use audit_relayer_sdk::prelude::*;
use serde_json::{json, Value};
use solana_keypair::Keypair;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct CapturedRequest {
    head: String,
    body: Value,
}

async fn respond_once(
    status: &'static str,
    response_body: String,
) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = serde_json::from_slice(&buf[header_end..header_end + content_length]).unwrap();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
            response_body.len(),
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        CapturedRequest { head, body }
    });

    (base_url, handle)
}

fn client_for(base_url: &str) -> RelayerClient {
    RelayerClient::builder()
        .relayer_url(base_url)
        .network_id(1)
        .subnet_uid(42)
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_miners_round_trip_over_http() {
    let (base_url, server) = respond_once(
        "200 OK",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [{"uid": 3, "ip": "10.1.1.1", "port": 8091, "hotkey": "hk", "coldkey": "ck"}]
        })
        .to_string(),
    )
    .await;

    let keypair = Keypair::new();
    let client = client_for(&base_url);
    let miners = client.metagraph().get_miners(&keypair).await.unwrap();
    assert_eq!(miners.len(), 1);
    assert_eq!(miners[0].uid, 3);
    assert_eq!(miners[0].endpoint(), "10.1.1.1:8091");

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("POST /api/jsonrpc HTTP/1.1"));
    assert!(captured
        .head
        .to_ascii_lowercase()
        .contains("content-type: application/json"));
    assert_eq!(captured.body["method"], "metagraph.get_miners");
    assert_eq!(captured.body["id"], 1);

    let params: RelayerMessage = serde_json::from_value(captured.body["params"].clone()).unwrap();
    assert!(params.verify());
}

#[tokio::test]
async fn json_error_with_failure_status_is_a_relayer_error() {
    let (base_url, server) = respond_once(
        "400 Bad Request",
        json!({"error": "bad signature"}).to_string(),
    )
    .await;

    let keypair = Keypair::new();
    let err = client_for(&base_url)
        .metagraph()
        .get_validators(&keypair)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Rpc(RpcError::Relayer(ref p)) if p == "bad signature"));
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_server_error_maps_to_status() {
    let (base_url, server) =
        respond_once("500 Internal Server Error", "upstream exploded".to_string()).await;

    let keypair = Keypair::new();
    let err = client_for(&base_url)
        .storage()
        .get_storage(&keypair)
        .await
        .unwrap_err();
    match err {
        SdkError::Http(HttpError::ServerError { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("Expected server error, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let (base_url, server) = respond_once("404 Not Found", json!({}).to_string()).await;

    let keypair = Keypair::new();
    let err = client_for(&base_url)
        .metagraph()
        .get_miners(&keypair)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::NotFound(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn invalid_json_with_success_status_is_invalid_body() {
    let (base_url, server) = respond_once("200 OK", "not json".to_string()).await;

    let keypair = Keypair::new();
    let err = client_for(&base_url)
        .metagraph()
        .get_miners(&keypair)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::InvalidBody(_))));
    server.await.unwrap();
}
