use tokio::sync::mpsc::Sender;

use super::{error::Error, types::QueryStreamer};
use common::types::LogQuery;

pub struct Producer<S: QueryStreamer> {
    streamer: S,
}

impl<S> Producer<S>
where
    S: QueryStreamer,
{
    pub fn new(streamer: S) -> Self {
        Producer { streamer }
    }

    pub fn spawn(self, sender: Sender<Vec<LogQuery>>) -> tokio::task::JoinHandle<Result<(), Error>> {
        println!("Producer ready.");
        tokio::spawn(async move { self.streamer.run_stream(sender).await })
    }
}
