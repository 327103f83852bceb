use tokio::sync::mpsc::Receiver;

use super::error::Error;
use common::types::{LogEvaluation, LogQuery};
use log_solver_core::traits::LogSolver;

/// Async consumer that drains query batches from the pipeline and
/// evaluates each one with the configured series depth.
pub struct Evaluator<S: LogSolver> {
    solver: S,
    receiver: Receiver<Vec<LogQuery>>,
    terms: usize,
}

impl<S> Evaluator<S>
where
    S: LogSolver + Send + 'static,
{
    pub fn new(solver: S, receiver: Receiver<Vec<LogQuery>>, terms: usize) -> Self {
        Self {
            solver,
            receiver,
            terms,
        }
    }

    /// Run the evaluator asynchronously.
    ///
    /// Consumes batches from the receiver and evaluates each query
    /// independently. A query outside the logarithm's domain is reported
    /// and skipped; it never stops the pipeline. Exits gracefully when
    /// the receiver is closed.
    pub async fn process_queries(mut self) -> Result<(), Error> {
        println!("Evaluator ready.");

        while let Some(batch) = self.receiver.recv().await {
            for result in evaluate_batch(&self.solver, &batch, self.terms) {
                match result {
                    Ok(eval) => {
                        println!(
                            "log_{}({}) = {:.6}",
                            eval.base, eval.x, eval.value
                        );
                    }
                    Err((x, base, e)) => {
                        eprintln!("Evaluator: skipping query ({}, {}): {}", x, base, e);
                    }
                }
            }
        }

        println!("Receiver closed, shutting down evaluator.");
        Ok(())
    }

    /// Public method that spawns the Evaluator task onto the Tokio runtime.
    ///
    /// This function consumes the Evaluator instance (`self`) and returns a
    /// JoinHandle, allowing the pipeline orchestrator to monitor the task.
    pub fn spawn_task(self) -> tokio::task::JoinHandle<Result<(), Error>> {
        tokio::spawn(self.process_queries())
    }
}

type BatchItem = Result<LogEvaluation, (f64, f64, common::error::Error)>;

/// Evaluates one batch of queries, keeping per-query failures alongside
/// the successes so the caller decides how to report them.
fn evaluate_batch<S: LogSolver>(solver: &S, batch: &[LogQuery], terms: usize) -> Vec<BatchItem> {
    batch
        .iter()
        .map(|&(x, base)| match solver.log_base(x, base, terms) {
            Ok(value) => Ok(LogEvaluation { x, base, value }),
            Err(e) => Err((x, base, e)),
        })
        .collect()
}
