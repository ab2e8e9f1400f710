//! Integration tests for custom message templates and the one-shot fallback

use std::sync::Arc;
use std::time::Duration;

use medir::clock::ManualClock;
use medir::config::ProfileConfig;
use medir::identity::Identity;
use medir::sink::MemorySink;
use medir::wrapper::Instrumented;
use medir::{call_args, signature};

fn order_processor(
    sink: Arc<MemorySink>,
    clock: Arc<ManualClock>,
    template: &str,
    log_start: bool,
) -> Instrumented {
    Instrumented::new(
        Identity::function("main", "process_order"),
        signature![order_id, customer_name, items],
        ProfileConfig::builder()
            .logger(sink)
            .clock(clock)
            .log_start(log_start)
            .custom_message(template)
            .build(),
    )
}

#[test]
fn test_custom_message_substitutes_bound_arguments() {
    let sink = Arc::new(MemorySink::new());
    let clock = Arc::new(ManualClock::new());
    let process = order_processor(
        sink.clone(),
        clock,
        "Order {order_id} for {customer_name}",
        false,
    );

    process.call(call_args![500, "akbar", vec!["milk"]], || ());

    let lines = sink.info_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Order 500 for akbar"));
    assert!(!lines[0].contains("Finished"));
}

#[test]
fn test_custom_message_appends_elapsed_on_finish() {
    let sink = Arc::new(MemorySink::new());
    let clock = Arc::new(ManualClock::new());
    let process = order_processor(
        sink.clone(),
        clock.clone(),
        "Processing order {order_id} for customer {customer_name}",
        false,
    );

    process.call(call_args![500, "akbar", vec!["milk"]], || {
        clock.advance(Duration::from_millis(42));
    });

    assert!(sink.contains(
        "Processing order 500 for customer akbar (execution time: 0.0420 secs)"
    ));
}

#[test]
fn test_custom_message_on_start_and_finish() {
    let sink = Arc::new(MemorySink::new());
    let clock = Arc::new(ManualClock::new());
    let process = order_processor(
        sink.clone(),
        clock,
        "Order {order_id} in flight",
        true,
    );

    process.call(call_args![500, "akbar", vec!["milk"]], || ());

    let lines = sink.info_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Order 500 in flight");
    assert!(lines[1].starts_with("Order 500 in flight (execution time:"));
}

#[test]
fn test_missing_key_produces_single_diagnostic_and_falls_back() {
    let sink = Arc::new(MemorySink::new());
    let clock = Arc::new(ManualClock::new());
    let process = order_processor(
        sink.clone(),
        clock,
        "Order {order_idx} for {customer_name}",
        true,
    );

    process.call(call_args![500, "akbar", vec!["milk"]], || ());

    let errors = sink.error_lines();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        "Error in custom message: missing key 'order_idx'. Using default format."
    );

    // Both lines used the default format: the broken template never renders.
    let lines = sink.info_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Starting main.process_order()"));
    assert!(lines[1].starts_with("Finished main.process_order() (execution time:"));
    assert!(!sink.contains("order_idx}"));
}

#[test]
fn test_fallback_keeps_derived_variables_in_default_format() {
    // The template-derived variable list survives the fallback: resolvable
    // placeholder names still render as an args clause.
    let sink = Arc::new(MemorySink::new());
    let clock = Arc::new(ManualClock::new());
    let process = order_processor(
        sink.clone(),
        clock,
        "Order {order_id} for {ghost}",
        false,
    );

    process.call(call_args![500, "akbar", vec!["milk"]], || ());

    let lines = sink.info_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Finished main.process_order()"));
    assert!(lines[0].contains("with args: order_id=500"));
}

#[test]
fn test_explicit_log_variables_win_over_template_scan() {
    let sink = Arc::new(MemorySink::new());
    let clock = Arc::new(ManualClock::new());
    let process = Instrumented::new(
        Identity::function("main", "process_order"),
        signature![order_id, customer_name, items],
        ProfileConfig::builder()
            .logger(sink.clone())
            .clock(clock)
            .log_variables(["customer_name"])
            .custom_message("Order {order_id}")
            .build(),
    );

    process.call(call_args![500, "akbar", vec!["milk"]], || ());

    // The explicit list does not include order_id, so the template cannot
    // resolve it and the default format takes over, rendering the explicit
    // selection instead.
    assert!(sink.contains("with args: customer_name=\"akbar\""));
    assert_eq!(sink.error_lines().len(), 1);
}

#[test]
fn test_custom_message_with_positional_index_placeholder() {
    let sink = Arc::new(MemorySink::new());
    let clock = Arc::new(ManualClock::new());
    let sum = Instrumented::new(
        Identity::function("main", "sum"),
        medir::signature::Signature::builder()
            .variadic_positional()
            .build(),
        ProfileConfig::builder()
            .logger(sink.clone())
            .clock(clock)
            .custom_message("summing from {0}")
            .build(),
    );

    sum.call(call_args![7, 8, 9], || 24);

    assert!(sink.contains("summing from 7"));
}
