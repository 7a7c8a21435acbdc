//! # Arithmetic Kernel Module / 算术内核模块
//!
//! This module defines the three calculation operations served over HTTP
//! and verified by the check runner. Both sides of the wire go through
//! [`Operation::apply`], so a check suite and the service can never
//! disagree on the semantics of an operation.
//!
//! 此模块定义了通过 HTTP 提供并由检查运行器验证的三种计算操作。
//! 连接两端都通过 [`Operation::apply`]，因此检查套件和服务
//! 永远不会在操作语义上产生分歧。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A calculation operation addressable as the first path segment of a
/// service URL (`/add/2/2`) and as the `op` field of a check case.
///
/// 一种计算操作，可作为服务 URL 的第一个路径段（`/add/2/2`）
/// 以及检查用例的 `op` 字段进行寻址。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `lhs + rhs` / `lhs + rhs`
    Add,
    /// `lhs - rhs` / `lhs - rhs`
    Subtract,
    /// `lhs * rhs` / `lhs * rhs`
    Multiply,
}

/// Error returned when an operation name does not match any known operation.
/// 当操作名称不匹配任何已知操作时返回的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl Operation {
    /// Every supported operation, in the order they are documented.
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Applies the operation to two operands.
    ///
    /// Overflow wraps in two's complement; the same wrapping semantics are
    /// used by the service handler and by any reference computation, so a
    /// result near the `i64` boundary is still compared consistently.
    ///
    /// 将操作应用于两个操作数。
    /// 溢出按二进制补码回绕；服务处理器和任何参考计算都使用相同的
    /// 回绕语义，因此接近 `i64` 边界的结果仍然可以一致地比较。
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operation::Add => lhs.wrapping_add(rhs),
            Operation::Subtract => lhs.wrapping_sub(rhs),
            Operation::Multiply => lhs.wrapping_mul(rhs),
        }
    }

    /// The lowercase wire name of the operation, as used in request paths.
    /// 操作的小写线上名称，用于请求路径。
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}
