//! # Endpoint Client Module / 端点客户端模块
//!
//! This module provides the typed HTTP access layer to a calculation
//! endpoint. The response body is decoded through a typed struct, so a
//! missing or non-integer `result` field surfaces as a distinct
//! malformed-response error instead of a generic lookup failure.
//!
//! 此模块提供对计算端点的类型化 HTTP 访问层。
//! 响应体通过类型化结构体解码，因此缺失或非整数的 `result` 字段
//! 会作为独立的响应格式错误出现，而不是一般的查找失败。

use crate::core::arith::Operation;
use crate::core::models::ErrorKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// The wire shape of a calculation answer: `{"result": <integer>}`.
/// 计算答案的线上格式：`{"result": <integer>}`。
#[derive(Debug, Deserialize)]
struct CalcResponse {
    result: i64,
}

/// Errors raised while trying to obtain a well-formed answer from the
/// endpoint. These map one-to-one onto [`ErrorKind`] for reporting; none of
/// them is ever treated as a check pass or as a plain mismatch.
///
/// 尝试从端点获得格式正确答案时引发的错误。
/// 它们与 [`ErrorKind`] 一一对应以用于报告；
/// 任何一个都不会被视为检查通过或普通的结果不匹配。
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    /// 请求从未产生响应。
    #[error("endpoint unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    /// The request did not complete within the deadline.
    /// 请求未在期限内完成。
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The endpoint answered with a non-success status.
    /// 端点以非成功状态作出回答。
    #[error("endpoint answered HTTP {0}")]
    Http(reqwest::StatusCode),
    /// The body could not be decoded as `{"result": <integer>}`.
    /// 响应体无法解码为 `{"result": <integer>}`。
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// The reporting category of this error.
    /// 此错误的报告类别。
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Unreachable(_) => ErrorKind::Unreachable,
            ClientError::Timeout(_) => ErrorKind::Timeout,
            ClientError::Http(_) => ErrorKind::Http,
            ClientError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

/// A reusable client for one calculation endpoint, identified by its base URL.
/// Cloning is cheap; the underlying connection pool is shared.
///
/// 一个针对单个计算端点的可复用客户端，由其基础 URL 标识。
/// 克隆开销很小；底层连接池是共享的。
#[derive(Debug, Clone)]
pub struct EndpointClient {
    http: reqwest::Client,
    base_url: String,
}

impl EndpointClient {
    /// Creates a client for `base_url`. A trailing slash is tolerated.
    /// 为 `base_url` 创建客户端。允许尾部斜杠。
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests `GET {base_url}/{op}/{lhs}/{rhs}` and decodes the answer.
    ///
    /// The timeout covers the whole request, including reading the body.
    /// Error classification: a timeout stays a timeout even when reqwest
    /// wraps it in a request error; any other transport failure is
    /// `Unreachable`; a non-2xx status is `Http`; a body that does not
    /// decode as `{"result": <integer>}` is `MalformedResponse`.
    ///
    /// 请求 `GET {base_url}/{op}/{lhs}/{rhs}` 并解码答案。
    /// 超时覆盖整个请求，包括读取响应体。
    pub async fn calculate(
        &self,
        op: Operation,
        lhs: i64,
        rhs: i64,
        timeout: Duration,
    ) -> Result<i64, ClientError> {
        let url = format!("{}/{}/{}/{}", self.base_url, op, lhs, rhs);

        let response = self
            .http
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(e, timeout))?;

        let decoded: CalcResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
        Ok(decoded.result)
    }
}

fn classify_transport_error(error: reqwest::Error, timeout: Duration) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(timeout)
    } else {
        ClientError::Unreachable(error)
    }
}
