//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML check reports.
//! It creates styled HTML files with run statistics, a detailed results
//! table, and interactive features for viewing failure details.
//!
//! 此模块处理 HTML 检查报告的生成。
//! 它创建带有运行统计、详细结果表格和查看失败详情的交互功能的
//! 样式化 HTML 文件。

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::models::{CheckResult, RunSummary};
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Generates a comprehensive HTML report from check results.
/// Creates a styled HTML file with run statistics, a detailed results
/// table, and collapsible detail rows for mismatches and errors.
///
/// 从检查结果生成综合的 HTML 报告。
/// 创建一个样式化的 HTML 文件，包含运行统计、详细结果表格
/// 以及不匹配和错误的可折叠详情行。
///
/// # Arguments / 参数
/// * `results` - The check results, in configuration order
///               检查结果，按配置顺序排列
/// * `summary` - The aggregated summary derived from `results`
///               由 `results` 导出的聚合摘要
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
/// * `locale` - The locale to use for internationalization
///              用于国际化使用的语言环境
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written.
/// 如果无法写入输出文件，此函数将返回错误。
pub fn generate_html_report(
    results: &[CheckResult],
    summary: &RunSummary,
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));

    // Summary statistics
    html.push_str("<div class='summary-container'>");
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        summary.total,
        t!("html_report.summary.total", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count passed-text'>{}</span><span class='label'>{}</span></div>",
        summary.passed,
        t!("html_report.summary.passed", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count mismatched-text'>{}</span><span class='label'>{}</span></div>",
        summary.mismatched,
        t!("html_report.summary.mismatched", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count errored-text'>{}</span><span class='label'>{}</span></div>",
        summary.errored,
        t!("html_report.summary.errored", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count skipped-text'>{}</span><span class='label'>{}</span></div>",
        summary.skipped,
        t!("html_report.summary.skipped", locale = locale)
    ));
    html.push_str("</div>");

    // Results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.name", locale = locale)
    ));
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.request", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='duration-cell'>{}</th>",
        t!("html_report.table.header.duration", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for (i, result) in results.iter().enumerate() {
        let status_str = result.get_status_str(locale);
        let status_class = result.get_status_class();
        let duration_str = result
            .get_duration()
            .map(|d| format!("{:.3}s", d.as_secs_f64()))
            .unwrap_or_else(|| "N/A".to_string());

        let detail = result.detail(locale);
        let detail_id = format!("detail-{}", i);
        let detail_row = if detail.is_empty() {
            String::new()
        } else {
            format!(
                "<tr id='{}' style='display:none;'><td colspan='4'><pre class='detail-content'>{}</pre></td></tr>",
                detail_id,
                escape_html(&detail)
            )
        };

        let detail_toggle = if detail.is_empty() {
            String::new()
        } else {
            format!(
                "<div class='detail-toggle' onclick=\"toggleDetail('{}')\">{}</div>",
                detail_id,
                t!("html_report.toggle_detail", locale = locale)
            )
        };

        html.push_str("<tr>");
        html.push_str(&format!(
            "<td>{}</td>",
            escape_html(result.case().label())
        ));
        html.push_str(&format!(
            "<td><code>{}</code></td>",
            escape_html(&result.case().request_path())
        ));
        html.push_str(&format!(
            "<td class='status-col'><div class='status-cell {}'>{}</div>{}</td>",
            status_class, status_str, detail_toggle
        ));
        html.push_str(&format!("<td class='duration-cell'>{}</td>", duration_str));
        html.push_str("</tr>");
        html.push_str(&detail_row);
    }

    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<p class='generated-at'>{}</p>",
        t!(
            "html_report.generated_at",
            locale = locale,
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");

    fs::write(output_path, html)?;
    Ok(())
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
