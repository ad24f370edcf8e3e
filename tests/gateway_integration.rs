//! Integration tests for the gateway HTTP surface.

use std::time::Duration;

use content_gateway::config::{GatewayConfig, LibraryConfig};
use content_gateway::http::HttpServer;
use content_gateway::lifecycle::Shutdown;
use serde_json::{json, Value};
use tokio::sync::mpsc;

/// Config with the two default-category libraries declared.
fn test_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.clientlibs.libraries = vec![
        LibraryConfig {
            path: "/etc/clientlibs/limit".to_string(),
            categories: vec!["authoring.limit-indicator".to_string()],
        },
        LibraryConfig {
            path: "/etc/clientlibs/placeholder".to_string(),
            categories: vec!["authoring.placeholder".to_string()],
        },
    ];
    config
}

/// Boot the gateway on an ephemeral port.
///
/// Returns the base URL, the shutdown coordinator, and the config-update
/// sender (kept alive so reloads can be driven from tests).
async fn spawn_gateway(
    config: GatewayConfig,
) -> (String, Shutdown, mpsc::UnboundedSender<GatewayConfig>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (config_tx, config_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, config_updates, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (format!("http://{}", addr), shutdown, config_tx)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_clientlibs_listing_with_default_categories() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .get(format!("{}/etc/clientlibs/dynamic.json", url))
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "js": ["/etc/clientlibs/limit.js", "/etc/clientlibs/placeholder.js"],
            "css": ["/etc/clientlibs/limit.css", "/etc/clientlibs/placeholder.css"]
        })
    );
}

#[tokio::test]
async fn test_clientlibs_listing_with_context_path() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .get(format!("{}/etc/clientlibs/dynamic.json", url))
        .header("x-forwarded-prefix", "/test")
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "js": ["/test/etc/clientlibs/limit.js", "/test/etc/clientlibs/placeholder.js"],
            "css": ["/test/etc/clientlibs/limit.css", "/test/etc/clientlibs/placeholder.css"]
        })
    );
}

#[tokio::test]
async fn test_clientlibs_listing_minified() {
    let mut config = test_config();
    config.clientlibs.minify = true;
    config.clientlibs.categories = vec!["authoring.placeholder".to_string()];
    let (url, _shutdown, _tx) = spawn_gateway(config).await;

    let res = client()
        .get(format!("{}/etc/clientlibs/dynamic.json", url))
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "js": ["/etc/clientlibs/placeholder.min.js"],
            "css": ["/etc/clientlibs/placeholder.min.css"]
        })
    );
}

#[tokio::test]
async fn test_clientlibs_exclude_all() {
    let mut config = test_config();
    config.clientlibs.exclude_all = true;
    let (url, _shutdown, _tx) = spawn_gateway(config).await;

    let res = client()
        .get(format!("{}/etc/clientlibs/dynamic.json", url))
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"js": [], "css": []}));
}

#[tokio::test]
async fn test_clientlibs_rejects_post() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .post(format!("{}/etc/clientlibs/dynamic.json", url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);
}

#[tokio::test]
async fn test_form_post_with_selector() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .post(format!("{}/content/page.html/submit/form/contact", url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"form": "contact"}));
}

#[tokio::test]
async fn test_form_post_without_selector() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .post(format!("{}/content/page.html/submit/form", url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn test_form_get_is_not_routed() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .get(format!("{}/content/page.html/submit/form/contact", url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_unrelated_path_is_not_routed() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .post(format!("{}/content/page.html/other/path", url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (url, _shutdown, _tx) = spawn_gateway(test_config()).await;

    let res = client()
        .get(format!("{}/etc/clientlibs/dynamic.json", url))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_config_reload_swaps_snapshot() {
    let (url, _shutdown, tx) = spawn_gateway(test_config()).await;

    let mut updated = test_config();
    updated.clientlibs.exclude_all = true;
    tx.send(updated).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let res = client()
        .get(format!("{}/etc/clientlibs/dynamic.json", url))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"js": [], "css": []}));
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let (url, shutdown, _tx) = spawn_gateway(test_config()).await;

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(300)).await;

    let res = client()
        .get(format!("{}/etc/clientlibs/dynamic.json", url))
        .send()
        .await;
    assert!(res.is_err(), "Server should no longer accept connections");
}
