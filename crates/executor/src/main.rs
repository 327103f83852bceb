pub mod config;
pub mod csv_streamer;
pub mod error;
pub mod evaluator;
pub mod interactive;
pub mod producer;
pub mod simulator;
pub mod types;

use std::env;
use tokio::sync::{mpsc, mpsc::Sender};

use common::types::LogQuery;
use csv_streamer::CsvStreamer;
use evaluator::Evaluator;
use log_solver_core::AtanhLogSolver;
use producer::Producer;
use simulator::SimulatorStreamer;
use types::{DataSource, JoinHandleResult};

#[tokio::main]
async fn main() {
    let source = parse_args();
    let config = config::load_config().expect("Failed to load config");

    if matches!(source, DataSource::Interactive) {
        if let Err(e) = interactive::run(&AtanhLogSolver, config.interactive.terms) {
            eprintln!("Interactive session failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let (sender, receiver) = mpsc::channel::<Vec<LogQuery>>(config.executor.buffer_size);

    // Spawn tasks
    let producer_handle = spawn_producer(&source, sender, &config);
    let evaluator_handle = spawn_evaluator(receiver, config.evaluator.terms);

    let _ = tokio::join!(producer_handle, evaluator_handle);

    println!("Pipeline shut down.");
}

/// Parse command-line arguments to determine the query source
fn parse_args() -> DataSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "interactive".to_string());

    match source.as_str() {
        "interactive" => DataSource::Interactive,
        "sim" => DataSource::Sim,
        "csv" => {
            let path = args.get(2).expect("CSV path required for CSV mode").clone();
            DataSource::Csv(path)
        }
        _ => {
            eprintln!(
                "Usage: {} <INTERACTIVE|CSV|SIM> [path_to_csv]\n  - INTERACTIVE: prompt for a single (x, base) pair\n  - CSV: evaluate query pairs from a CSV file\n  - SIM: evaluate a simulated query stream",
                args[0]
            );
            std::process::exit(1);
        }
    }
}

pub fn spawn_producer(
    source: &DataSource,
    sender: Sender<Vec<LogQuery>>,
    config: &config::Config,
) -> JoinHandleResult {
    match source {
        DataSource::Sim => {
            println!("Starting SimulatorStreamer producer task...");
            let streamer = SimulatorStreamer::new(config.simulator.clone());
            let producer = Producer::new(streamer);
            producer.spawn(sender)
        }
        DataSource::Csv(path) => {
            println!("Starting CsvStreamer producer task...");
            let streamer = CsvStreamer::new(path.clone(), config.producer.batch_size);
            let producer = Producer::new(streamer);
            producer.spawn(sender)
        }
        DataSource::Interactive => {
            // Interactive mode is dispatched before the pipeline is assembled.
            unreachable!("interactive mode does not use the producer pipeline")
        }
    }
}

/// Spawn evaluator task
fn spawn_evaluator(receiver: mpsc::Receiver<Vec<LogQuery>>, terms: usize) -> JoinHandleResult {
    let evaluator = Evaluator::new(AtanhLogSolver, receiver, terms);
    evaluator.spawn_task()
}
