//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use portfolio_server::{HttpServer, PortfolioConfig, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral port. Stops when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with default settings.
pub async fn start_server() -> TestServer {
    start_server_with(PortfolioConfig::default()).await
}

/// Start a server with the given configuration.
pub async fn start_server_with(mut config: PortfolioConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}
