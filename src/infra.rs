//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Endpoint Checker,
//! including the typed HTTP client and i18n support.
//!
//! 此模块为 Endpoint Checker 提供基础设施服务，
//! 包括类型化 HTTP 客户端和国际化支持。

pub mod client;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
