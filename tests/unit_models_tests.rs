//! # Models Module Unit Tests / Models 模块单元测试
//!
//! This module contains unit tests for the `models.rs` module, testing the
//! per-case result model and the aggregated run summary.
//!
//! 此模块包含 `models.rs` 模块的单元测试，
//! 测试每用例结果模型和聚合的运行摘要。

use endpoint_checker::core::arith::Operation;
use endpoint_checker::core::config::CheckCase;
use endpoint_checker::core::models::{CheckResult, ErrorKind, RunSummary};
use std::time::Duration;

/// Helper function to create a check case / 创建检查用例的辅助函数
fn create_case(name: &str) -> CheckCase {
    CheckCase {
        name: name.to_string(),
        op: Operation::Add,
        lhs: 2,
        rhs: 2,
        expected: 4,
        description: None,
        timeout_secs: None,
    }
}

fn passed(name: &str) -> CheckResult {
    CheckResult::Passed {
        case: create_case(name),
        actual: 4,
        duration: Duration::from_millis(12),
    }
}

fn mismatched(name: &str) -> CheckResult {
    let mut case = create_case(name);
    case.expected = 5;
    CheckResult::Mismatched {
        case,
        actual: 4,
        duration: Duration::from_millis(9),
    }
}

fn errored(name: &str, kind: ErrorKind) -> CheckResult {
    CheckResult::Errored {
        case: create_case(name),
        kind,
        message: "connection refused".to_string(),
        duration: Duration::from_millis(3),
    }
}

#[cfg(test)]
mod check_result_tests {
    use super::*;

    #[test]
    fn test_passed_accessors() {
        let result = passed("add-small");

        assert!(result.is_pass());
        assert!(!result.is_mismatch());
        assert!(!result.is_error());
        assert_eq!(result.case_name(), "add-small");
        assert_eq!(result.actual(), Some(4));
        assert_eq!(result.get_duration(), Some(Duration::from_millis(12)));
        assert!(result.detail("en").is_empty());
    }

    #[test]
    fn test_mismatch_is_not_an_error() {
        let result = mismatched("add-wrong");

        assert!(result.is_mismatch());
        assert!(!result.is_error());
        assert_eq!(result.actual(), Some(4));

        // The detail names both sides of the comparison.
        let detail = result.detail("en");
        assert!(detail.contains('5'));
        assert!(detail.contains('4'));
    }

    #[test]
    fn test_error_is_not_a_mismatch() {
        let result = errored("add-dead", ErrorKind::Unreachable);

        assert!(result.is_error());
        assert!(!result.is_mismatch());
        assert!(!result.is_pass());
        assert_eq!(result.actual(), None);

        let detail = result.detail("en");
        assert!(detail.contains("unreachable"));
        assert!(detail.contains("connection refused"));
    }

    #[test]
    fn test_skipped_has_no_duration() {
        let result = CheckResult::Skipped {
            case: create_case("never-ran"),
        };

        assert!(result.is_skipped());
        assert_eq!(result.get_duration(), None);
        assert_eq!(result.actual(), None);
        assert_eq!(result.case_name(), "never-ran");
    }

    #[test]
    fn test_status_classes_are_distinct() {
        let r_passed = passed("a");
        let r_mismatched = mismatched("b");
        let r_errored = errored("c", ErrorKind::Timeout);
        let r_skipped = CheckResult::Skipped { case: create_case("d") };
        let classes = [
            r_passed.get_status_class(),
            r_mismatched.get_status_class(),
            r_errored.get_status_class(),
            r_skipped.get_status_class(),
        ];

        for (i, left) in classes.iter().enumerate() {
            for right in classes.iter().skip(i + 1) {
                assert_ne!(left, right);
            }
        }
    }
}

#[cfg(test)]
mod run_summary_tests {
    use super::*;

    #[test]
    fn test_counts_add_up() {
        let results = vec![
            passed("a"),
            mismatched("b"),
            errored("c", ErrorKind::Timeout),
            CheckResult::Skipped { case: create_case("d") },
            passed("e"),
        ];

        let summary = RunSummary::from_results(&results, "en");

        assert_eq!(summary.total, 5);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.mismatched, 1);
        assert_eq!(summary.errored, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            summary.passed + summary.mismatched + summary.errored + summary.skipped,
            summary.total
        );
    }

    #[test]
    fn test_success_requires_no_mismatches_and_no_errors() {
        let all_green = RunSummary::from_results(&[passed("a"), passed("b")], "en");
        assert!(all_green.success());

        let with_mismatch = RunSummary::from_results(&[passed("a"), mismatched("b")], "en");
        assert!(!with_mismatch.success());

        let with_error =
            RunSummary::from_results(&[passed("a"), errored("b", ErrorKind::Http)], "en");
        assert!(!with_error.success());

        // Skips alone do not fail a run.
        let with_skip = RunSummary::from_results(
            &[passed("a"), CheckResult::Skipped { case: create_case("b") }],
            "en",
        );
        assert!(with_skip.success());
    }

    #[test]
    fn test_failure_entries_keep_result_order_and_category() {
        let results = vec![
            mismatched("first-wrong"),
            passed("fine"),
            errored("then-dead", ErrorKind::Unreachable),
        ];

        let summary = RunSummary::from_results(&results, "en");

        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].name, "first-wrong");
        assert!(!summary.failures[0].infrastructure);
        assert_eq!(summary.failures[1].name, "then-dead");
        assert!(summary.failures[1].infrastructure);
    }

    #[test]
    fn test_empty_run_is_successful_but_empty() {
        let summary = RunSummary::from_results(&[], "en");

        assert_eq!(summary.total, 0);
        assert!(summary.success());
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let results = vec![
            passed("a"),
            mismatched("b"),
            errored("c", ErrorKind::MalformedResponse),
        ];

        let first = RunSummary::from_results(&results, "en");
        let second = RunSummary::from_results(&results, "en");

        assert_eq!(first, second);
    }
}
