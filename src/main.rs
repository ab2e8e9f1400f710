use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use medir::cli::{Cli, Scenario};
use medir::config::{ProfileConfig, ProfileConfigBuilder};
use medir::identity::Identity;
use medir::signature::Signature;
use medir::sink::{LogSink, TracingSink};
use medir::wrapper::Instrumented;
use medir::{call_args, signature};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for --tracing and --debug output
fn init_tracing(cli: &Cli) {
    if cli.tracing || cli.debug {
        let level = if cli.debug {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        };
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
            .init();
    }
}

fn demo_logger(cli: &Cli) -> Option<Arc<dyn LogSink>> {
    if cli.tracing {
        Some(Arc::new(TracingSink::new()))
    } else {
        None
    }
}

fn configure(logger: &Option<Arc<dyn LogSink>>) -> ProfileConfigBuilder {
    match logger {
        Some(sink) => ProfileConfig::builder().logger(sink.clone()),
        None => ProfileConfig::builder(),
    }
}

/// Busy loop standing in for real work in the demo scenarios.
fn spin(time: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..time {
        acc = acc.wrapping_add(i * i);
    }
    acc
}

/// Default format, "Starting" line, one selected variable.
fn run_selected(logger: &Option<Arc<dyn LogSink>>) {
    let run_400 = Instrumented::new(
        Identity::function("main", "run_400"),
        signature![time = 200u64],
        configure(logger)
            .log_start(true)
            .log_variables(["time"])
            .build(),
    );
    run_400.call(call_args![20u64], || spin(20));
}

/// Finish line only: no start, no variables.
fn run_silent(logger: &Option<Arc<dyn LogSink>>) {
    let run_500 = Instrumented::new(
        Identity::function("main", "run_500"),
        signature![time = 200u64],
        configure(logger).build(),
    );
    run_500.call(call_args![20u64], || spin(20));
}

/// Variadic sum; extra positionals render under "0", "1", ...
fn run_variadic(logger: &Option<Arc<dyn LogSink>>) {
    let sum = Instrumented::new(
        Identity::function("main", "sum"),
        Signature::builder().variadic_positional().build(),
        configure(logger).log_start(true).log_all_args(true).build(),
    );
    let total = sum.call(call_args![1, 2, 3, 4], || 1 + 2 + 3 + 4);
    tracing::debug!(target: "medir", "sum returned {}", total);
}

/// Every declared parameter rendered, defaults included.
fn run_all_args(logger: &Option<Arc<dyn LogSink>>) {
    let multiply = Instrumented::new(
        Identity::function("main", "multiply"),
        signature![a, b, c = 1],
        configure(logger).log_start(true).log_all_args(true).build(),
    );
    let product = multiply.call(call_args![2, 3; c = 4], || 2 * 3 * 4);
    tracing::debug!(target: "medir", "multiply returned {}", product);
}

/// Custom message template interpolated from bound arguments.
fn run_custom_message(logger: &Option<Arc<dyn LogSink>>) {
    let process_order = Instrumented::new(
        Identity::function("main", "process_order"),
        signature![order_id, customer_name, items],
        configure(logger)
            .custom_message("Processing order {order_id} for customer {customer_name}")
            .build(),
    );
    process_order.call(call_args![500, "akbar", vec!["milk"]], || ());
}

fn run_scenario(scenario: Scenario, logger: &Option<Arc<dyn LogSink>>) {
    match scenario {
        Scenario::Selected => run_selected(logger),
        Scenario::Silent => run_silent(logger),
        Scenario::Variadic => run_variadic(logger),
        Scenario::AllArgs => run_all_args(logger),
        Scenario::CustomMessage => run_custom_message(logger),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    let logger = demo_logger(&cli);

    let scenarios = match cli.scenario {
        Some(scenario) => vec![scenario],
        None => vec![
            Scenario::Selected,
            Scenario::Silent,
            Scenario::Variadic,
            Scenario::AllArgs,
            Scenario::CustomMessage,
        ],
    };

    for scenario in scenarios {
        run_scenario(scenario, &logger);
    }

    Ok(())
}
