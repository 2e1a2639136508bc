use panel_config::{ConfigKind, ConfigLoader, ConfigStore, NetworkedProvider};
use panel_server::{PanelServer, ServerConfig};
use std::sync::Arc;
use tempfile::TempDir;
use testing::write_config_dir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn server_over(root: &TempDir) -> PanelServer {
    let config = ServerConfig::builder()
        .config_root(root.path())
        .build()
        .unwrap();
    PanelServer::new(config)
}

#[tokio::test]
async fn test_warm_cache_counts_available_documents() {
    let empty = TempDir::new().unwrap();
    assert_eq!(server_over(&empty).warm_cache().await, 0);

    let full = TempDir::new().unwrap();
    write_config_dir(full.path()).unwrap();
    let server = server_over(&full);
    assert_eq!(server.warm_cache().await, 3);
    assert_eq!(server.state().loader.store().len(), 3);
}

#[tokio::test]
async fn test_networked_loader_reads_from_running_server() {
    let root = TempDir::new().unwrap();
    write_config_dir(root.path()).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let handle = tokio::spawn(server_over(&root).serve(listener, async move {
        let _ = stopped.await;
    }));

    let loader = ConfigLoader::new(
        Arc::new(ConfigStore::new()),
        Arc::new(NetworkedProvider::new(format!("http://{addr}"))),
    );
    let android = loader.android().await.unwrap();
    assert_eq!(android.android_version, "Android 11");

    let err = loader.load_by_name("printer").await.unwrap_err();
    assert!(err.to_string().contains("printer"));
    assert!(loader.store().contains(ConfigKind::Android));

    stop.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
