//! # Check Execution Engine Module / 检查执行引擎模块
//!
//! This module drives check cases against a calculation endpoint. It handles
//! the per-case request lifecycle, outcome classification, cancellation and
//! the parallel job pool, while keeping summary content deterministic.
//!
//! 此模块针对计算端点驱动检查用例。它处理每用例请求生命周期、
//! 结果分类、取消和并行任务池，同时保持摘要内容的确定性。

use colored::*;
use futures::{StreamExt, stream};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::{CheckCase, CheckSuite},
        models::CheckResult,
    },
    infra::{client::EndpointClient, t},
};

/// Drives a single check case against the endpoint and classifies the outcome.
///
/// A well-formed answer is compared to the expectation with exact integer
/// equality. Anything that prevents a well-formed answer becomes an
/// `Errored` result carrying the transport error category; it is never
/// folded into the pass or mismatch buckets. This function never returns an
/// `Err`: every way a case can go wrong is itself a reportable result.
///
/// 针对端点驱动单个检查用例并对结果进行分类。
/// 格式正确的答案通过精确整数相等与预期进行比较。
/// 任何阻止获得格式正确答案的情况都会成为携带传输错误类别的
/// `Errored` 结果；它永远不会被归入通过或不匹配的类别。
///
/// # Arguments / 参数
/// * `case` - The check case to drive / 要驱动的检查用例
/// * `client` - The endpoint client / 端点客户端
/// * `timeout` - The effective request timeout / 有效的请求超时时间
/// * `locale` - The language locale for progress lines / 进度行的语言区域设置
pub async fn run_check_case(
    case: CheckCase,
    client: &EndpointClient,
    timeout: Duration,
    locale: &str,
) -> CheckResult {
    println!(
        "{}",
        t!(
            "run.checking",
            locale = locale,
            name = &case.name,
            request = case.request_path()
        )
        .blue()
    );

    let start = Instant::now();
    match client.calculate(case.op, case.lhs, case.rhs, timeout).await {
        Ok(actual) => {
            let duration = start.elapsed();
            if actual == case.expected {
                println!(
                    "{}",
                    t!(
                        "run.check_passed",
                        locale = locale,
                        name = &case.name,
                        duration = duration.as_secs_f64()
                    )
                    .green()
                );
                CheckResult::Passed { case, actual, duration }
            } else {
                println!(
                    "{}",
                    t!(
                        "run.check_mismatched",
                        locale = locale,
                        name = &case.name,
                        expected = case.expected,
                        actual = actual
                    )
                    .red()
                );
                CheckResult::Mismatched { case, actual, duration }
            }
        }
        Err(error) => {
            let duration = start.elapsed();
            println!(
                "{}",
                t!(
                    "run.check_errored",
                    locale = locale,
                    name = &case.name,
                    error = &error
                )
                .magenta()
            );
            CheckResult::Errored {
                case,
                kind: error.kind(),
                message: error.to_string(),
                duration,
            }
        }
    }
}

/// Drives every case of the suite and returns results in configuration order.
///
/// Up to `jobs` cases run concurrently; cases are independent, so the only
/// effect of the pool size is wall-clock time. Completion order is
/// unpredictable under parallelism, so each result is tagged with its case
/// index and the collected vector is restored to configuration order before
/// it is returned. Two runs against a deterministic endpoint therefore
/// produce identical summaries regardless of `jobs`.
///
/// Cancelling `stop_token` abandons in-flight cases and reports them, along
/// with every case not yet started, as `Skipped`.
///
/// 驱动套件的每个用例并按配置顺序返回结果。
/// 最多 `jobs` 个用例并发运行；用例相互独立，因此池大小只影响
/// 墙钟时间。并行下完成顺序不可预测，所以每个结果都带有其用例
/// 索引，收集到的向量在返回前恢复为配置顺序。
/// 取消 `stop_token` 会将尚未开始的每个用例报告为 `Skipped`。
pub async fn run_suite(
    suite: &CheckSuite,
    client: &EndpointClient,
    jobs: usize,
    stop_token: CancellationToken,
    locale: &str,
) -> Vec<CheckResult> {
    let jobs = jobs.max(1);

    let mut indexed_results: Vec<(usize, CheckResult)> =
        stream::iter(suite.cases.iter().cloned().enumerate().map(|(index, case)| {
            let stop_token = stop_token.clone();
            let timeout = suite.timeout_for(&case);
            async move {
                if stop_token.is_cancelled() {
                    return (index, CheckResult::Skipped { case });
                }

                let check = run_check_case(case.clone(), client, timeout, locale);
                tokio::select! {
                    biased;
                    _ = stop_token.cancelled() => (index, CheckResult::Skipped { case }),
                    result = check => (index, result),
                }
            }
        }))
        .buffer_unordered(jobs)
        .collect()
        .await;

    indexed_results.sort_by_key(|(index, _)| *index);
    indexed_results.into_iter().map(|(_, result)| result).collect()
}
