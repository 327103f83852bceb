use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use super::error::Error;
use common::types::LogQuery;

/// A trait defining the contract for any source that generates and streams
/// logarithm queries into the main processing pipeline.
///
/// This trait is designed for **decoupling** the Producer task from the
/// specific query source (e.g., CSV file vs. simulated data).
///
/// The trait bounds (`Send`, `Sync`, `'static`) are mandatory to ensure the
/// implementation can be safely executed by the multi-threaded asynchronous runtime (Tokio).
#[async_trait::async_trait]
pub trait QueryStreamer: Send + Sync + 'static {
    async fn run_stream(self, sender: Sender<Vec<LogQuery>>) -> Result<(), Error>;
}

/// Where the pipeline gets its queries from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Prompt for a single (x, base) pair on stdin.
    Interactive,
    /// Stream query pairs from a CSV file.
    Csv(String),
    /// Stream randomly generated query pairs.
    Sim,
}

pub type JoinHandleResult = JoinHandle<Result<(), Error>>;
