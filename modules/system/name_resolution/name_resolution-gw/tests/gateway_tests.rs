#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use modkit_bootstrap::AppConfig;
use name_resolution_gw::NameResolutionGateway;
use name_resolution_sdk::{
    Metadata, NameResolutionError, NameResolverGatewayClient, ResolveRequest,
};
use static_nr_plugin::StaticNrPlugin;
use tokio_util::sync::CancellationToken;
use tracing_test::traced_test;

fn metadata(id: &str, address: &str, port: &str) -> Metadata {
    Metadata::new()
        .with_property(Metadata::INSTANCE_NAME, id)
        .with_property(Metadata::INSTANCE_ADDRESS, address)
        .with_property(Metadata::INSTANCE_PORT, port)
}

fn app_config(yaml: &str) -> AppConfig {
    AppConfig::from_yaml_str(yaml).expect("valid config")
}

/// Gateway with both built-in plugins registered.
fn gateway(app: &AppConfig, shutdown: CancellationToken) -> Arc<dyn NameResolverGatewayClient> {
    let gw = NameResolutionGateway::default();
    gw.register_plugin(Arc::new(localhost_nr_plugin::Service));
    gw.register_plugin(StaticNrPlugin::default().init(app, shutdown).unwrap());
    gw.init(app).unwrap()
}

#[tokio::test]
#[traced_test]
async fn static_plugin_wins_over_localhost() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_config(&format!(
        "modules:\n  static_nr_plugin:\n    config:\n      directory: \"{}\"\n",
        dir.path().display()
    ));
    let client = gateway(&app, CancellationToken::new());

    client
        .init(&metadata("orders", "10.0.0.1", "50001"))
        .await
        .unwrap();
    let address = client
        .resolve_id(&ResolveRequest::new("orders", 3500))
        .await
        .unwrap();

    assert_eq!(address, "10.0.0.1:50001");
    assert!(dir.path().join("orders.json").exists());
    assert!(logs_contain("Selected name resolution plugin instance"));
}

#[tokio::test]
async fn localhost_plugin_wins_when_prioritized() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_config(&format!(
        "modules:\n  static_nr_plugin:\n    config:\n      priority: 2000\n      directory: \"{}\"\n",
        dir.path().display()
    ));
    let client = gateway(&app, CancellationToken::new());

    client
        .init(&metadata("orders", "10.0.0.1", "50001"))
        .await
        .unwrap();
    let address = client
        .resolve_id(&ResolveRequest::new("orders", 3500))
        .await
        .unwrap();

    assert_eq!(address, "localhost:3500");
    assert!(!dir.path().join("orders.json").exists());
}

#[tokio::test]
#[traced_test]
async fn unknown_vendor_yields_no_plugin_available() {
    let app = app_config("modules:\n  name_resolution:\n    config:\n      vendor: acme\n");
    let client = gateway(&app, CancellationToken::new());

    let err = client
        .resolve_id(&ResolveRequest::new("orders", 3500))
        .await
        .unwrap_err();

    assert!(matches!(err, NameResolutionError::NoPluginAvailable));
    assert!(logs_contain("name_resolution gateway call failed"));
}

#[tokio::test]
async fn plugin_errors_reach_the_caller_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_config(&format!(
        "modules:\n  static_nr_plugin:\n    config:\n      directory: \"{}\"\n",
        dir.path().display()
    ));
    let client = gateway(&app, CancellationToken::new());

    let err = client
        .init(&metadata("orders", "10.0.0.1", "port"))
        .await
        .unwrap_err();
    assert!(matches!(err, NameResolutionError::InvalidPort { .. }));

    let err = client
        .resolve_id(&ResolveRequest::new("billing", 3500))
        .await
        .unwrap_err();
    assert!(matches!(err, NameResolutionError::NotFound { .. }));
}

#[tokio::test]
async fn shutdown_through_gateway_removes_entry() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_config(&format!(
        "modules:\n  static_nr_plugin:\n    config:\n      directory: \"{}\"\n",
        dir.path().display()
    ));
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let shutdown = modkit_bootstrap::shutdown_token_on(async move {
        let _ = rx.await;
    });
    let client = gateway(&app, shutdown.clone());

    client
        .init(&metadata("orders", "10.0.0.1", "50001"))
        .await
        .unwrap();
    let path = dir.path().join("orders.json");
    assert!(path.exists());

    tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), async {
        while path.exists() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("entry removed after shutdown");
    assert!(shutdown.is_cancelled());
}
