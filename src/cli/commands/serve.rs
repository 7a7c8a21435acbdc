//! # Serve Command Module / 服务命令模块
//!
//! This module implements the `serve` command for the Endpoint Checker CLI,
//! which hosts the built-in calculation service until interrupted.
//!
//! 此模块实现了 Endpoint Checker CLI 的 `serve` 命令，
//! 托管内置计算服务直到被中断。

use anyhow::Result;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::server;

/// Executes the serve command: binds the address and serves calculation
/// requests until Ctrl-C.
///
/// # Arguments
/// * `addr` - The socket address to bind, e.g. `127.0.0.1:8080`
/// * `locale` - The language locale for status messages
pub async fn execute(addr: String, locale: &str) -> Result<()> {
    let stop = CancellationToken::new();
    let stop_on_signal = stop.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            stop_on_signal.cancel();
        }
    });

    server::serve(&addr, stop, locale).await
}
