//! # Check Suite Configuration Module / 检查套件配置模块
//!
//! This module defines the check suite loaded from a TOML file: the list of
//! check cases to run against a calculation endpoint, plus suite-wide
//! settings such as the target base URL and the output language.
//!
//! 此模块定义从 TOML 文件加载的检查套件：要针对计算端点运行的
//! 检查用例列表，以及套件级设置（如目标基础 URL 和输出语言）。

use crate::core::arith::Operation;
use crate::infra::t;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Timeout applied to a request when neither the suite nor the case sets one.
/// 套件和用例都未设置超时时应用于请求的超时时间。
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Represents a single check case defined in the suite configuration.
/// Each `CheckCase` pairs one request against the endpoint with the exact
/// integer result it is expected to produce.
///
/// 代表套件配置中定义的单个检查用例。
/// 每个 `CheckCase` 将一次针对端点的请求与其预期产生的
/// 精确整数结果配对。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckCase {
    /// The unique name for the check case, used for identification in logs.
    /// 检查用例的唯一名称，用于在日志中进行识别。
    pub name: String,
    /// The operation to request from the endpoint.
    /// 要向端点请求的操作。
    pub op: Operation,
    /// The first operand, placed in the request path.
    /// 第一个操作数，置于请求路径中。
    pub lhs: i64,
    /// The second operand, placed in the request path.
    /// 第二个操作数，置于请求路径中。
    pub rhs: i64,
    /// The exact integer result the endpoint is expected to answer.
    /// 端点预期回答的精确整数结果。
    pub expected: i64,
    /// An optional human-readable description shown in reports. Falls back
    /// to `name` when absent.
    /// 可选的人类可读描述，显示在报告中。缺省时回退到 `name`。
    #[serde(default)]
    pub description: Option<String>,
    /// An optional timeout in seconds for this case, overriding the
    /// suite-wide default. A request running longer is reported as a
    /// timeout error, not a mismatch.
    /// 此用例的可选超时时间（秒），覆盖套件级默认值。
    /// 运行时间更长的请求将报告为超时错误，而不是结果不匹配。
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CheckCase {
    /// The label shown to humans: the description when present, else the name.
    /// 向用户显示的标签：有描述时为描述，否则为名称。
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    /// The request path this case resolves to, without the base URL.
    /// 此用例解析出的请求路径，不含基础 URL。
    pub fn request_path(&self) -> String {
        format!("/{}/{}/{}", self.op, self.lhs, self.rhs)
    }
}

impl Default for CheckCase {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            op: Operation::Add,
            lhs: 0,
            rhs: 0,
            expected: 0,
            description: None,
            timeout_secs: None,
        }
    }
}

/// Represents the entire check suite, loaded from a TOML file.
/// It contains suite-wide settings and the ordered list of all check cases.
///
/// 代表从 TOML 文件加载的整个检查套件。
/// 它包含套件级设置和所有检查用例的有序列表。
#[derive(Debug, Deserialize, Serialize)]
pub struct CheckSuite {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The base URL of the calculation endpoint under check.
    /// 被检查的计算端点的基础 URL。
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// A suite-wide request timeout in seconds, applied to every case that
    /// does not set its own `timeout_secs`.
    /// 套件级请求超时时间（秒），应用于每个未设置自身
    /// `timeout_secs` 的用例。
    #[serde(default)]
    pub default_timeout_secs: Option<u64>,

    /// A vector containing all the check cases, in report order.
    /// 一个包含所有检查用例的向量，按报告顺序排列。
    pub cases: Vec<CheckCase>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl CheckSuite {
    /// Validates the suite before any case executes. A malformed case list
    /// (no cases, a blank name, a duplicate name) is fatal to the run.
    ///
    /// 在任何用例执行之前验证套件。格式错误的用例列表
    /// （没有用例、空白名称、重复名称）对运行是致命的。
    pub fn validate(&self) -> Result<()> {
        if self.cases.is_empty() {
            bail!(t!("config.no_cases"));
        }
        let mut seen = HashSet::new();
        for case in &self.cases {
            if case.name.trim().is_empty() {
                bail!(t!("config.blank_name"));
            }
            if !seen.insert(case.name.as_str()) {
                bail!(t!("config.duplicate_case", name = &case.name));
            }
        }
        Ok(())
    }

    /// Resolves the effective timeout for a case: the case override wins,
    /// then the suite default, then [`DEFAULT_TIMEOUT_SECS`].
    /// 解析用例的有效超时时间：用例覆盖优先，其次是套件默认值，
    /// 最后是 [`DEFAULT_TIMEOUT_SECS`]。
    pub fn timeout_for(&self, case: &CheckCase) -> Duration {
        Duration::from_secs(
            case.timeout_secs
                .or(self.default_timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}

/// Loads and validates a check suite from a TOML file.
///
/// 从 TOML 文件加载并验证检查套件。
pub fn load_check_suite(path: &Path) -> Result<CheckSuite> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()))?;
    let suite: CheckSuite =
        toml::from_str(&content).with_context(|| t!("config.parse_failed", path = path.display()))?;
    suite.validate()?;
    Ok(suite)
}
