//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the checker.
//! It includes the per-case result model, the infrastructure error taxonomy
//! and the aggregated run summary.
//!
//! 此模块定义了整个检查器中使用的核心数据结构。
//! 它包括每用例结果模型、基础设施错误分类和聚合的运行摘要。

use crate::core::config::CheckCase;
use crate::infra::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Classifies the infrastructure-level ways a check can go wrong before a
/// well-formed result is even obtained. A mismatch between a well-formed
/// result and the expectation is deliberately NOT part of this enum: it is
/// a check failure, not an infrastructure error.
///
/// 对在获得格式正确的结果之前检查可能出错的基础设施级方式进行分类。
/// 格式正确的结果与预期之间的不匹配故意不属于此枚举：
/// 它是检查失败，而不是基础设施错误。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The endpoint could not be reached at all (connection refused, DNS...).
    /// 端点完全无法访问（连接被拒绝、DNS 等）。
    Unreachable,
    /// The request did not complete within the effective timeout.
    /// 请求未在有效超时时间内完成。
    Timeout,
    /// The endpoint answered a non-success HTTP status.
    /// 端点回答了非成功的 HTTP 状态。
    Http,
    /// The endpoint answered, but the body was not `{"result": <integer>}`.
    /// 端点作出了回答，但响应体不是 `{"result": <integer>}`。
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Unreachable => "unreachable",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Http => "http-status",
            ErrorKind::MalformedResponse => "malformed-response",
        };
        f.write_str(s)
    }
}

/// Represents the final result of a single check case.
/// This enum captures all possible outcomes of driving one case against the
/// endpoint: a correct answer, a wrong answer, an infrastructure error, or
/// a case skipped because the run was cancelled.
///
/// 表示单个检查用例的最终结果。
/// 此枚举捕获针对端点驱动一个用例的所有可能结果：
/// 正确答案、错误答案、基础设施错误，或因运行被取消而跳过的用例。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CheckResult {
    /// The endpoint answered exactly the expected integer.
    /// 端点准确回答了预期的整数。
    Passed {
        /// The check case that was driven / 被驱动的检查用例
        case: CheckCase,
        /// The decoded result / 解码后的结果
        actual: i64,
        /// The time taken for the request / 请求所花费的时间
        duration: Duration,
    },
    /// The endpoint answered a well-formed but wrong integer.
    /// 端点回答了格式正确但错误的整数。
    Mismatched {
        /// The check case that was driven / 被驱动的检查用例
        case: CheckCase,
        /// The decoded (wrong) result / 解码后的（错误）结果
        actual: i64,
        /// The time taken for the request / 请求所花费的时间
        duration: Duration,
    },
    /// No well-formed answer could be obtained; this is never counted as a
    /// pass and is reported distinctly from a mismatch.
    /// 无法获得格式正确的答案；这永远不会被计为通过，
    /// 并且与结果不匹配分开报告。
    Errored {
        /// The check case that was driven / 被驱动的检查用例
        case: CheckCase,
        /// The infrastructure error category / 基础设施错误类别
        kind: ErrorKind,
        /// The underlying error message / 底层错误消息
        message: String,
        /// The time taken before the error surfaced / 错误出现前所花费的时间
        duration: Duration,
    },
    /// The case was not driven because the run was cancelled first.
    /// 由于运行先被取消，该用例未被驱动。
    Skipped {
        /// The check case that was skipped / 被跳过的检查用例
        case: CheckCase,
    },
}

impl CheckResult {
    /// Gets the check case this result belongs to.
    pub fn case(&self) -> &CheckCase {
        match self {
            CheckResult::Passed { case, .. }
            | CheckResult::Mismatched { case, .. }
            | CheckResult::Errored { case, .. }
            | CheckResult::Skipped { case } => case,
        }
    }

    /// Gets the name of the check case.
    /// 获取检查用例的名称。
    pub fn case_name(&self) -> &str {
        &self.case().name
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Passed { .. })
    }

    /// A well-formed but wrong answer.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, CheckResult::Mismatched { .. })
    }

    /// An infrastructure error, per the taxonomy in [`ErrorKind`].
    pub fn is_error(&self) -> bool {
        matches!(self, CheckResult::Errored { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckResult::Skipped { .. })
    }

    /// Gets the decoded result, when one was obtained.
    /// 获取解码后的结果（如果获得了结果）。
    pub fn actual(&self) -> Option<i64> {
        match self {
            CheckResult::Passed { actual, .. } | CheckResult::Mismatched { actual, .. } => {
                Some(*actual)
            }
            _ => None,
        }
    }

    /// Gets the duration of the check. Returns None for skipped cases.
    /// 获取检查的持续时间。对于跳过的用例返回 None。
    pub fn get_duration(&self) -> Option<Duration> {
        match self {
            CheckResult::Passed { duration, .. }
            | CheckResult::Mismatched { duration, .. }
            | CheckResult::Errored { duration, .. } => Some(*duration),
            CheckResult::Skipped { .. } => None,
        }
    }

    /// Gets the status of the check result as a string for display.
    /// 以字符串形式获取检查结果的状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        match self {
            CheckResult::Passed { .. } => t!("report.status_passed", locale = locale).to_string(),
            CheckResult::Mismatched { .. } => {
                t!("report.status_mismatched", locale = locale).to_string()
            }
            CheckResult::Errored { .. } => t!("report.status_errored", locale = locale).to_string(),
            CheckResult::Skipped { .. } => t!("report.status_skipped", locale = locale).to_string(),
        }
    }

    /// Gets the appropriate CSS class for the check status.
    pub fn get_status_class(&self) -> &str {
        match self {
            CheckResult::Passed { .. } => "status-Passed",
            CheckResult::Mismatched { .. } => "status-Mismatched",
            CheckResult::Errored { .. } => "status-Errored",
            CheckResult::Skipped { .. } => "status-Skipped",
        }
    }

    /// A one-line human-readable explanation for mismatches and errors.
    /// Returns an empty string for passes and skips.
    ///
    /// 对不匹配和错误的单行人类可读解释。
    /// 对通过和跳过的用例返回空字符串。
    pub fn detail(&self, locale: &str) -> String {
        match self {
            CheckResult::Mismatched { case, actual, .. } => t!(
                "report.mismatch_detail",
                locale = locale,
                request = case.request_path(),
                expected = case.expected,
                actual = actual
            )
            .to_string(),
            CheckResult::Errored { case, kind, message, .. } => t!(
                "report.error_detail",
                locale = locale,
                request = case.request_path(),
                kind = kind,
                message = message
            )
            .to_string(),
            _ => String::new(),
        }
    }
}

/// A single entry in the ordered failure list of a [`RunSummary`].
/// 一个 [`RunSummary`] 有序失败列表中的单个条目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEntry {
    /// Name of the offending case / 问题用例的名称
    pub name: String,
    /// Expected-vs-actual text, or the transport error / 预期与实际的对比文本，或传输错误
    pub detail: String,
    /// `true` for infrastructure errors, `false` for mismatches.
    /// 基础设施错误为 `true`，结果不匹配为 `false`。
    pub infrastructure: bool,
}

/// The aggregated outcome of a whole run, derived from an ordered result
/// slice. Counts always satisfy
/// `passed + mismatched + errored + skipped == total`.
///
/// 整个运行的聚合结果，由有序结果切片导出。
/// 计数始终满足 `passed + mismatched + errored + skipped == total`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub mismatched: usize,
    pub errored: usize,
    pub skipped: usize,
    /// Failure entries in result order, mismatches and errors alike.
    /// 按结果顺序排列的失败条目，包括不匹配和错误。
    pub failures: Vec<FailureEntry>,
}

impl RunSummary {
    /// Derives a summary from results. Pure: no output is produced here, so
    /// the aggregation logic is testable without capturing the console.
    ///
    /// 从结果导出摘要。纯函数：此处不产生任何输出，
    /// 因此聚合逻辑无需捕获控制台即可测试。
    pub fn from_results(results: &[CheckResult], locale: &str) -> Self {
        let mut summary = RunSummary {
            total: results.len(),
            passed: 0,
            mismatched: 0,
            errored: 0,
            skipped: 0,
            failures: Vec::new(),
        };

        for result in results {
            match result {
                CheckResult::Passed { .. } => summary.passed += 1,
                CheckResult::Mismatched { .. } => {
                    summary.mismatched += 1;
                    summary.failures.push(FailureEntry {
                        name: result.case_name().to_string(),
                        detail: result.detail(locale),
                        infrastructure: false,
                    });
                }
                CheckResult::Errored { .. } => {
                    summary.errored += 1;
                    summary.failures.push(FailureEntry {
                        name: result.case_name().to_string(),
                        detail: result.detail(locale),
                        infrastructure: true,
                    });
                }
                CheckResult::Skipped { .. } => summary.skipped += 1,
            }
        }

        summary
    }

    /// Overall success: no mismatches and no infrastructure errors.
    /// Skipped cases do not fail a run on their own.
    ///
    /// 总体成功：没有不匹配且没有基础设施错误。
    /// 跳过的用例本身不会使运行失败。
    pub fn success(&self) -> bool {
        self.mismatched == 0 && self.errored == 0
    }
}
