//! # Endpoint Checker Library / Endpoint Checker 库
//!
//! This library provides the core functionality for the Endpoint Checker tool,
//! a configuration-driven verification runner for HTTP calculation endpoints.
//!
//! 此库为 Endpoint Checker 工具提供核心功能，
//! 这是一个配置驱动的 HTTP 计算端点验证运行器。
//!
//! ## Modules / 模块
//!
//! - `core` - Core data models, the arithmetic kernel and the check execution engine
//! - `infra` - Infrastructure services like the typed HTTP client and i18n support
//! - `reporting` - Check result reporting and visualization
//! - `server` - The built-in calculation service
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 核心数据模型、算术内核和检查执行引擎
//! - `infra` - 基础设施服务，如类型化 HTTP 客户端和国际化支持
//! - `reporting` - 检查结果报告和可视化
//! - `server` - 内置计算服务
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;
pub mod server;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
