use criterion::{Criterion, criterion_group, criterion_main};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use endpoint_checker::core::arith::Operation;
use endpoint_checker::core::config::{CheckCase, CheckSuite};
use endpoint_checker::core::execution::run_suite;
use endpoint_checker::core::models::{CheckResult, RunSummary};
use endpoint_checker::infra::client::EndpointClient;
use endpoint_checker::server;

fn reference_suite(base_url: String) -> CheckSuite {
    let case = |name: &str, op: Operation, lhs: i64, rhs: i64, expected: i64| CheckCase {
        name: name.to_string(),
        op,
        lhs,
        rhs,
        expected,
        description: None,
        timeout_secs: None,
    };

    CheckSuite {
        language: "en".to_string(),
        base_url,
        default_timeout_secs: Some(5),
        cases: vec![
            case("add-small", Operation::Add, 2, 2, 4),
            case("subtract-equal", Operation::Subtract, 2, 2, 0),
            case("multiply-small", Operation::Multiply, 2, 2, 4),
            case("add-negative", Operation::Add, -1, 1, 0),
            case("multiply-zero", Operation::Multiply, 0, 5, 0),
        ],
    }
}

fn bench_run_suite(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let (addr, _stop) = rt.block_on(async {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let stop = CancellationToken::new();
        let shutdown = stop.clone();
        tokio::spawn(async move {
            axum::serve(listener, server::router())
                .with_graceful_shutdown(async move { shutdown.cancelled().await })
                .await
                .unwrap();
        });
        (addr, stop)
    });

    let suite = reference_suite(format!("http://{}", addr));
    let client = EndpointClient::new(&suite.base_url).unwrap();

    c.bench_function("run_suite", |b| {
        b.to_async(&rt).iter(|| async {
            let _ = run_suite(&suite, &client, 4, CancellationToken::new(), "en").await;
        });
    });
}

fn bench_summary_aggregation(c: &mut Criterion) {
    let results: Vec<CheckResult> = (0..1000)
        .map(|i| {
            let case = CheckCase {
                name: format!("case-{}", i),
                op: Operation::Add,
                lhs: i,
                rhs: i,
                expected: i * 2,
                description: None,
                timeout_secs: None,
            };
            if i % 10 == 0 {
                CheckResult::Mismatched {
                    case,
                    actual: 0,
                    duration: std::time::Duration::from_millis(1),
                }
            } else {
                CheckResult::Passed {
                    case,
                    actual: i * 2,
                    duration: std::time::Duration::from_millis(1),
                }
            }
        })
        .collect();

    c.bench_function("summary_aggregation", |b| {
        b.iter(|| RunSummary::from_results(&results, "en"));
    });
}

criterion_group!(benches, bench_run_suite, bench_summary_aggregation);
criterion_main!(benches);
