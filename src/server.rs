//! # Calculation Service Module / 计算服务模块
//!
//! This module implements the built-in calculation service: three integer
//! operations exposed path-style as `GET /{op}/{lhs}/{rhs}`, answering
//! `{"result": <integer>}`. The handlers delegate to the arithmetic kernel,
//! so the service and the checker share one set of semantics.
//!
//! 此模块实现内置计算服务：三种整数操作以路径风格暴露为
//! `GET /{op}/{lhs}/{rhs}`，回答 `{"result": <integer>}`。
//! 处理器委托给算术内核，因此服务和检查器共享同一套语义。

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use colored::*;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::core::arith::Operation;
use crate::infra::t;

/// The body of a successful calculation answer.
/// 成功计算答案的响应体。
#[derive(Debug, Serialize)]
pub struct CalcBody {
    pub result: i64,
}

/// The body answered for an unknown operation.
/// 对未知操作回答的响应体。
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Builds the service router. Operands that do not parse as `i64` are
/// rejected by path extraction before the handler runs.
///
/// 构建服务路由器。无法解析为 `i64` 的操作数会在处理器运行之前
/// 被路径提取拒绝。
pub fn router() -> Router {
    Router::new().route("/{op}/{lhs}/{rhs}", get(calculate))
}

/// `GET /{op}/{lhs}/{rhs}`: applies the operation to the operands.
/// Unknown operation names answer `404` with a JSON error body.
///
/// `GET /{op}/{lhs}/{rhs}`：将操作应用于操作数。
/// 未知操作名称以带 JSON 错误体的 `404` 作出回答。
async fn calculate(Path((op, lhs, rhs)): Path<(String, i64, i64)>) -> Response {
    match op.parse::<Operation>() {
        Ok(op) => (
            StatusCode::OK,
            Json(CalcBody {
                result: op.apply(lhs, rhs),
            }),
        )
            .into_response(),
        Err(error) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: error.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Binds `addr` and serves until `stop` is cancelled.
///
/// 绑定 `addr` 并提供服务，直到 `stop` 被取消。
pub async fn serve(addr: &str, stop: CancellationToken, locale: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| t!("serve.bind_failed", locale = locale, addr = addr))?;

    let local_addr = listener
        .local_addr()
        .context("failed to read local address")?;
    println!(
        "{}",
        t!("serve.listening", locale = locale, addr = local_addr).green()
    );

    axum::serve(listener, router())
        .with_graceful_shutdown(async move { stop.cancelled().await })
        .await
        .with_context(|| t!("serve.server_error", locale = locale))?;

    println!("{}", t!("serve.stopped", locale = locale).yellow());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_operation_answers_ok() {
        let response = calculate(Path(("add".to_string(), 2, 2))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_operation_answers_not_found() {
        let response = calculate(Path(("divide".to_string(), 1, 2))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
