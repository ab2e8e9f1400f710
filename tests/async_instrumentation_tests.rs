//! Integration tests for asynchronous targets: transparency, concurrency,
//! and cancellation through the guaranteed-cleanup path

use std::sync::Arc;
use std::time::Duration;

use medir::config::ProfileConfig;
use medir::identity::Identity;
use medir::sink::MemorySink;
use medir::wrapper::Instrumented;
use medir::{call_args, signature};

fn doubler(sink: Arc<MemorySink>) -> Instrumented {
    Instrumented::new(
        Identity::function("demo", "double"),
        signature![x],
        ProfileConfig::builder()
            .logger(sink)
            .log_start(true)
            .log_all_args(true)
            .build(),
    )
}

#[tokio::test]
async fn test_async_call_returns_result_unchanged() {
    let sink = Arc::new(MemorySink::new());
    let double = doubler(sink.clone());

    let result = double.call_async(call_args![21], async { 21 * 2 }).await;

    assert_eq!(result, 42);
    assert!(sink.contains("Starting demo.double() with args: x=21"));
    assert!(sink.contains("Finished demo.double()"));
}

#[tokio::test]
async fn test_async_call_spans_suspension_points() {
    let sink = Arc::new(MemorySink::new());
    let double = doubler(sink.clone());

    let result = double
        .call_async(call_args![5], async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            10
        })
        .await;

    assert_eq!(result, 10);
    let finished: Vec<_> = sink
        .info_lines()
        .into_iter()
        .filter(|l| l.starts_with("Finished"))
        .collect();
    assert_eq!(finished.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_have_no_cross_talk() {
    let sink = Arc::new(MemorySink::new());
    let double = doubler(sink.clone());

    let mut handles = Vec::new();
    for x in 0..8i64 {
        let double = double.clone();
        handles.push(tokio::spawn(async move {
            double
                .call_async(call_args![x], async move {
                    tokio::time::sleep(Duration::from_millis(5 + (x as u64 % 3) * 5)).await;
                    x * 2
                })
                .await
        }));
    }
    for (x, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap(), (x as i64) * 2);
    }

    let lines = sink.info_lines();
    for x in 0..8i64 {
        let needle = format!("x={}", x);
        let starting = lines
            .iter()
            .filter(|l| l.starts_with("Starting") && l.contains(&needle))
            .count();
        let finished = lines
            .iter()
            .filter(|l| l.starts_with("Finished") && l.contains(&needle))
            .count();
        assert_eq!(starting, 1, "one Starting line for x={}", x);
        assert_eq!(finished, 1, "one Finished line for x={}", x);
    }
}

#[tokio::test]
async fn test_cancellation_still_logs_finished() {
    let sink = Arc::new(MemorySink::new());
    let double = doubler(sink.clone());

    let outcome = tokio::time::timeout(
        Duration::from_millis(20),
        double.call_async(call_args![1], std::future::pending::<i64>()),
    )
    .await;

    assert!(outcome.is_err(), "the wrapped future never completes");
    let finished: Vec<_> = sink
        .info_lines()
        .into_iter()
        .filter(|l| l.starts_with("Finished"))
        .collect();
    assert_eq!(finished.len(), 1);
    assert!(finished[0].contains("execution time:"));
}

#[tokio::test]
async fn test_async_error_result_passes_through() {
    let sink = Arc::new(MemorySink::new());
    let double = doubler(sink.clone());

    let result: Result<i64, String> = double
        .call_async(call_args![1], async { Err("boom".to_string()) })
        .await;

    assert_eq!(result, Err("boom".to_string()));
    assert!(sink.contains("Finished demo.double()"));
}
