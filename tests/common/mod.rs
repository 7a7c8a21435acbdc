//! Shared helpers for integration tests: an in-process calculation service
//! bound to an ephemeral port.
//!
//! 集成测试的共享辅助工具：绑定到临时端口的进程内计算服务。

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use endpoint_checker::server;

/// Spawns the real calculation service on `127.0.0.1:0` and returns its
/// address plus a token that shuts it down when cancelled.
pub async fn spawn_service() -> (SocketAddr, CancellationToken) {
    spawn_router(server::router()).await
}

/// Spawns an arbitrary router, for tests that need a misbehaving endpoint.
pub async fn spawn_router(router: Router) -> (SocketAddr, CancellationToken) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("failed to read local address");

    let stop = CancellationToken::new();
    let shutdown = stop.clone();
    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .expect("test service crashed");
    });

    (addr, stop)
}

/// Base URL for a spawned service address.
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
