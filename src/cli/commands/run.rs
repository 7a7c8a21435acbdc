//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command for the Endpoint Checker CLI,
//! which drives every check case of a suite against the target endpoint
//! and reports the aggregated outcome.
//!
//! 此模块实现了 Endpoint Checker CLI 的 `run` 命令，
//! 针对目标端点驱动套件的每个检查用例并报告聚合结果。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::PathBuf};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::{self, CheckSuite},
        execution::run_suite,
        models::RunSummary,
    },
    infra::{client::EndpointClient, t},
    reporting::{
        console::{print_counts, print_failure_details, print_summary},
        html::generate_html_report,
    },
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `jobs` - Number of cases to drive concurrently
/// * `config` - Path to the check suite configuration file
/// * `base_url` - Optional endpoint override for the suite's `base_url`
/// * `html` - Optional path for HTML report output
///
/// # Returns
/// `Ok(())` when every case passed; an error otherwise, so the process
/// exits non-zero on any mismatch or infrastructure error.
pub async fn execute(
    jobs: Option<usize>,
    config: PathBuf,
    base_url: Option<String>,
    html: Option<PathBuf>,
) -> Result<()> {
    // A malformed suite is fatal here, before any case executes.
    let (suite, config_path) = setup_and_parse_config(&config)?;
    let locale = suite.language.clone();
    rust_i18n::set_locale(&locale);

    let base_url = base_url.unwrap_or_else(|| suite.base_url.clone());
    let client = EndpointClient::new(&base_url)?;

    println!(
        "{}",
        t!("run.loading_suite", locale = locale, path = config_path.display())
    );
    println!(
        "{}",
        t!("run.target_endpoint", locale = locale, url = client.base_url().yellow())
    );
    println!(
        "{}",
        t!("run.case_count", locale = locale, count = suite.cases.len()).cyan()
    );

    let overall_stop_token = setup_signal_handler(&locale)?;

    let jobs = jobs.unwrap_or(num_cpus::get() / 2 + 1);
    let results = run_suite(&suite, &client, jobs, overall_stop_token, &locale).await;

    let summary = RunSummary::from_results(&results, &locale);
    print_summary(&results, &locale);

    if let Some(report_path) = &html {
        println!(
            "\n{}",
            t!("run.generating_html", locale = locale, path = report_path.display())
        );
        if let Err(e) = generate_html_report(&results, &summary, report_path, &locale) {
            eprintln!("{} {}", t!("run.html_failed", locale = locale).red(), e);
        }
    }

    print_counts(&summary, &locale);

    if summary.success() {
        println!(
            "\n{}",
            t!("report.all_passed", locale = locale).green().bold()
        );
        Ok(())
    } else {
        print_failure_details(&summary, &locale);
        anyhow::bail!(t!(
            "report.run_failed",
            locale = locale,
            mismatched = summary.mismatched,
            errored = summary.errored
        ));
    }
}

/// Resolves and parses the check suite configuration file.
fn setup_and_parse_config(config_path_arg: &PathBuf) -> Result<(CheckSuite, PathBuf)> {
    // For config parsing, the suite language is not known yet. Use the
    // process-wide locale set from --lang or the system.
    let config_path = fs::canonicalize(config_path_arg).with_context(|| {
        t!("config.read_failed", path = config_path_arg.display())
    })?;

    let suite = config::load_check_suite(&config_path)?;

    Ok((suite, config_path))
}

/// Sets up a signal handler for graceful shutdown.
fn setup_signal_handler(locale: &str) -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let token_clone = token.clone();
    let locale = locale.to_string();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_err() {
            return;
        }
        println!("\n{}", t!("run.shutdown_signal", locale = &locale).yellow());
        token_clone.cancel();
    });

    Ok(token)
}
