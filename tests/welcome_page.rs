//! Integration tests for the welcome page server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use welcome_server::{HttpServer, Settings};

/// Start the server on an ephemeral port and return its address.
async fn spawn_server(settings: Settings) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = HttpServer::new(settings).run(listener).await;
    });

    addr
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn root_serves_defaults() {
    let addr = spawn_server(Settings::default()).await;

    let res = client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 200);

    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "unexpected content type: {}",
        content_type
    );

    let body = res.text().await.unwrap();
    assert!(body.contains("Welcome to My App"));
    assert!(body.contains("Version: 3.1.0"));
    assert!(body.contains("Environment: development"));
}

#[tokio::test]
async fn root_serves_configured_values() {
    let settings = Settings {
        app_name: "X".into(),
        app_version: "1.2.3".into(),
        environment: "prod".into(),
    };
    let addr = spawn_server(settings).await;

    let res = client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 200);

    let body = res.text().await.unwrap();
    assert!(body.contains("Welcome to X"));
    assert!(body.contains("Version: 1.2.3"));
    assert!(body.contains("Environment: prod"));
    // Overridden values fully replace the defaults
    assert!(!body.contains("My App"));
    assert!(!body.contains("3.1.0"));
    assert!(!body.contains("development"));
}

#[tokio::test]
async fn partial_override_mixes_with_defaults() {
    let settings = Settings {
        app_name: "Foo".into(),
        ..Settings::default()
    };
    let addr = spawn_server(settings).await;

    let body = client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("Server unreachable")
        .text()
        .await
        .unwrap();

    assert!(body.contains("Welcome to Foo"));
    assert!(body.contains("Version: 3.1.0"));
    assert!(body.contains("Environment: development"));
}

#[tokio::test]
async fn other_paths_fall_through_to_not_found() {
    let addr = spawn_server(Settings::default()).await;

    let res = client()
        .get(format!("http://{}/status", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 404);

    let body = res.text().await.unwrap();
    assert!(!body.contains("Welcome to"));
}
