//! End-to-end tests: run the accept loop in-process on an ephemeral port
//! and speak raw HTTP/1.1 over a TCP stream.

use servedir::config::{AppContext, Config, FilesConfig, LoggingConfig, ServerConfig};
use servedir::http::CACHE_CONTROL_VALUE;
use servedir::server;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

fn test_root(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("servedir-server-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn test_context(root: &Path) -> Arc<AppContext> {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: None,
        },
        files: FilesConfig {
            root: root.display().to_string(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
        },
        logging: LoggingConfig {
            access_log: false,
            log_connections: false,
            access_log_file: None,
            error_log_file: None,
        },
    };
    Arc::new(AppContext::new(config).unwrap())
}

/// Bind an ephemeral port, spawn the accept loop, return its address and
/// the shutdown notifier.
fn start_server(root: &Path) -> (SocketAddr, Arc<Notify>, JoinHandle<()>) {
    let ctx = test_context(root);
    let listener = server::bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Arc::new(Notify::new());

    let loop_shutdown = Arc::clone(&shutdown);
    let handle = tokio::spawn(async move {
        server::run(listener, ctx, loop_shutdown).await.unwrap();
    });

    (addr, shutdown, handle)
}

/// Send one raw HTTP request and read the whole response.
async fn send_request(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

fn get(path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
}

#[tokio::test]
async fn test_get_serves_file_over_socket() {
    let root = test_root("get");
    fs::write(root.join("index.html"), "<h1>Hi</h1>").unwrap();
    let (addr, shutdown, handle) = start_server(&root);

    let response = send_request(addr, &get("/index.html")).await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "{response}");
    assert!(response.contains(&format!("cache-control: {CACHE_CONTROL_VALUE}")));
    assert!(response.ends_with("<h1>Hi</h1>"));

    shutdown.notify_one();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_path_is_404_over_socket() {
    let root = test_root("missing");
    let (addr, shutdown, handle) = start_server(&root);

    let response = send_request(addr, &get("/missing.txt")).await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
    assert!(response.contains(&format!("cache-control: {CACHE_CONTROL_VALUE}")));

    shutdown.notify_one();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_post_is_405_with_cache_header() {
    let root = test_root("post");
    let (addr, shutdown, handle) = start_server(&root);

    let request = "POST / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";
    let response = send_request(addr, request).await;
    assert!(response.starts_with("HTTP/1.1 405"), "{response}");
    assert!(response.contains(&format!("cache-control: {CACHE_CONTROL_VALUE}")));
    assert!(response.contains("allow: GET, HEAD"));

    shutdown.notify_one();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_sequential_requests_are_independent() {
    let root = test_root("sequential");
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("b.txt"), "beta").unwrap();
    let (addr, shutdown, handle) = start_server(&root);

    let first = send_request(addr, &get("/a.txt")).await;
    let second = send_request(addr, &get("/b.txt")).await;
    assert!(first.ends_with("alpha"));
    assert!(second.ends_with("beta"));

    shutdown.notify_one();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_shutdown_notification_stops_accept_loop() {
    let root = test_root("shutdown");
    let (addr, shutdown, handle) = start_server(&root);

    // Server is alive before the signal
    let response = send_request(addr, &get("/")).await;
    assert!(response.starts_with("HTTP/1.1"), "{response}");

    shutdown.notify_one();
    // run() returns Ok after the notification, so the task joins cleanly
    handle.await.unwrap();

    assert!(TcpStream::connect(addr).await.is_err());
}
