use std::fs;
use std::net::{IpAddr, Ipv4Addr};

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

const INDEX: &str = "<!DOCTYPE html><html><body>eco-client</body></html>";

fn site() -> (tempfile::TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::write(dir.path().join("main.css"), "body { margin: 0; }").unwrap();
    let config = ServerConfig {
        bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        site_dir: dir.path().to_path_buf(),
    };
    (dir, config)
}

async fn get_path(config: &ServerConfig, path: &str) -> (StatusCode, String) {
    let response = app(config)
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
    let (_dir, config) = site();
    let (status, _) = get_path(&config, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let (_dir, config) = site();
    let (status, body) = get_path(&config, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn admin_path_falls_back_to_index() {
    let (_dir, config) = site();
    let (status, body) = get_path(&config, "/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn static_assets_are_served() {
    let (_dir, config) = site();
    let (status, body) = get_path(&config, "/main.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");
}
