use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::Sender;
use tokio::time::{self, Duration};

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::QueryStreamer;
use common::types::LogQuery;

/// Smallest value the simulator will emit. Keeps generated inputs inside
/// the logarithm's domain (x > 0, b > 0).
const MIN_VALUE: f64 = 0.001;

/// Produces synthetic logarithm queries for simulation purposes.
///
/// Generates batches of random `(x, base)` pairs and sends them over a
/// Tokio bounded channel for processing. Bases land on either side of 1,
/// so the evaluator sees both positive and negative results; landing on
/// exactly 1 is possible but vanishingly rare, and the evaluator reports
/// it as a per-query error anyway.
pub struct SimulatorStreamer {
    config: SimulatorConfig,
}

impl SimulatorStreamer {
    pub fn new(config: SimulatorConfig) -> Self {
        SimulatorStreamer { config }
    }
}

#[async_trait]
impl QueryStreamer for SimulatorStreamer {
    /// Runs the simulation asynchronously.
    ///
    /// Periodically generates batches of queries and sends them via the
    /// provided `Sender`. Backpressure is handled naturally via awaiting
    /// on `sender.send()`. Exits gracefully if the receiver is dropped.
    async fn run_stream(self, sender: Sender<Vec<LogQuery>>) -> Result<(), Error> {
        let mut interval =
            time::interval(Duration::from_millis(self.config.simulation_interval_ms));

        let mut rng: SmallRng = SmallRng::from_os_rng();

        let value_range = MIN_VALUE..self.config.max_value;

        loop {
            interval.tick().await;

            // Generate a batch of queries
            let queries: Vec<LogQuery> = (0..self.config.batch_size)
                .map(|_| {
                    let x = rng.random_range(value_range.clone());
                    let base = rng.random_range(value_range.clone());

                    (x, base)
                })
                .collect();

            // Send batch, exit if receiver has been dropped
            println!("Producer sent {} queries.", queries.len());
            if sender.send(queries).await.is_err() {
                println!("Simulator shutting down: Evaluator receiver dropped.");
                return Err(Error::ChannelSendFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::{Duration, timeout};

    fn test_config(batch_size: usize) -> SimulatorConfig {
        SimulatorConfig {
            batch_size,
            simulation_interval_ms: 10,
            max_value: 100.0,
        }
    }

    /// SimulatorStreamer can be created correctly.
    #[test]
    fn test_simulator_creation() {
        let sim = SimulatorStreamer::new(test_config(5));
        assert_eq!(sim.config.batch_size, 5);
        assert_eq!(sim.config.max_value, 100.0);
    }

    /// SimulatorStreamer generates correct number of queries in a batch.
    #[tokio::test]
    async fn test_batch_size() {
        let sim = SimulatorStreamer::new(test_config(5));

        let (tx, mut rx) = mpsc::channel(10);

        // Run simulator for one tick using timeout to avoid infinite loop
        tokio::spawn(async move {
            let _ = sim.run_stream(tx).await;
        });

        // Receive first batch
        let queries = timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("Did not receive batch")
            .expect("Channel closed");

        assert_eq!(queries.len(), 5);
    }

    /// All generated values are positive and within bounds.
    #[tokio::test]
    async fn test_queries_in_bounds() {
        let sim = SimulatorStreamer::new(test_config(50));

        let (tx, mut rx) = mpsc::channel(10);

        tokio::spawn(async move {
            let _ = sim.run_stream(tx).await;
        });

        let queries = timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("Did not receive batch")
            .expect("Channel closed");

        for (x, base) in queries {
            assert!(x >= MIN_VALUE && x < 100.0, "x out of bounds: {}", x);
            assert!(
                base >= MIN_VALUE && base < 100.0,
                "base out of bounds: {}",
                base
            );
        }
    }
}
