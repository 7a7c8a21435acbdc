//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the generation and display of check reports in the
//! console. It provides functionality for printing colorful, formatted
//! summaries with internationalization support.
//!
//! 此模块处理控制台中检查报告的生成和显示。
//! 它提供打印彩色格式化摘要的功能，支持国际化。

use crate::core::models::{CheckResult, RunSummary};
use crate::infra::t;
use colored::*;

/// Prints a formatted summary of check results to the console.
/// Displays a table with check status, name and duration, using color
/// coding to highlight different statuses.
///
/// 在控制台打印格式化的检查结果摘要。
/// 显示一个包含检查状态、名称和持续时间的表格，
/// 使用颜色编码突出显示不同的状态。
///
/// # Output Format / 输出格式
/// ```text
/// --- Check Summary ---
///   - Passed           | add-small                                |     12.3ms
///   - Mismatched       | add-wrong                                |     11.8ms
///   - Errored          | add-dead-endpoint                        |      1.02s
///   - Skipped          | multiply-zero                            |        N/A
/// ```
pub fn print_summary(results: &[CheckResult], locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    for result in results {
        let status_str = result.get_status_str(locale);
        let duration_str = result
            .get_duration()
            .map(|d| format!("{:.2?}", d))
            .unwrap_or_else(|| "N/A".to_string());

        let status_colored = match result {
            CheckResult::Passed { .. } => status_str.green(),
            CheckResult::Mismatched { .. } => status_str.red(),
            CheckResult::Errored { .. } => status_str.magenta(),
            CheckResult::Skipped { .. } => status_str.dimmed(),
        };

        println!(
            "  - {:<18} | {:<40} | {:>10}",
            status_colored,
            result.case_name(),
            duration_str
        );
    }
}

/// Prints the aggregate counts line. Always called exactly once per run,
/// whatever the outcome.
///
/// 打印聚合计数行。每次运行无论结果如何都恰好调用一次。
pub fn print_counts(summary: &RunSummary, locale: &str) {
    println!(
        "{}",
        t!(
            "report.counts",
            locale = locale,
            total = summary.total,
            passed = summary.passed,
            mismatched = summary.mismatched,
            errored = summary.errored,
            skipped = summary.skipped
        )
    );
}

/// Prints detailed information about every failure entry of the run:
/// expected-vs-actual for mismatches, the transport error for
/// infrastructure errors. The two categories carry distinct tags so a
/// consumer can tell "did not respond" apart from "responded wrongly".
///
/// 打印运行中每个失败条目的详细信息：
/// 不匹配的预期与实际对比，基础设施错误的传输错误。
/// 两个类别带有不同的标签，因此使用者可以区分
/// "没有响应"和"响应错误"。
///
/// # Behavior / 行为
/// - Returns early if the run has no failure entries
/// - Uses colored output to improve readability
/// - Includes separator lines for visual clarity
///
/// - 如果运行没有失败条目则提前返回
/// - 使用彩色输出提高可读性
/// - 包含分隔线以提高视觉清晰度
pub fn print_failure_details(summary: &RunSummary, locale: &str) {
    if summary.failures.is_empty() {
        return;
    }

    println!(
        "\n{}",
        t!("report.failure_banner", locale = locale).red().bold()
    );
    println!("{}", "-".repeat(80));

    for (i, entry) in summary.failures.iter().enumerate() {
        let tag = if entry.infrastructure {
            t!("report.tag_error", locale = locale).magenta()
        } else {
            t!("report.tag_failure", locale = locale).red()
        };
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            summary.failures.len(),
            tag,
            entry.name.cyan()
        );
        println!("    {}", entry.detail);
    }

    println!("{}", "-".repeat(80));
}
