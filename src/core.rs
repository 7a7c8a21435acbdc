//! # Core Module / 核心模块
//!
//! This module contains the domain logic of Endpoint Checker:
//! the arithmetic kernel, the check suite configuration, the result
//! models and the execution engine.
//!
//! 此模块包含 Endpoint Checker 的领域逻辑：
//! 算术内核、检查套件配置、结果模型和执行引擎。

pub mod arith;
pub mod config;
pub mod execution;
pub mod models;
