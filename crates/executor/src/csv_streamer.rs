use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use tokio::sync::mpsc::Sender;

use super::error::Error;
use super::types::QueryStreamer;
use common::types::LogQuery;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "x")]
    pub value: f64,

    #[serde(rename = "base")]
    pub base: f64,
}

pub struct CsvStreamer {
    path: String,
    batch_size: usize,
}

impl CsvStreamer {
    pub fn new(path: String, batch_size: usize) -> Self {
        CsvStreamer { path, batch_size }
    }

    fn parse_csv_to_queries(&self) -> Result<Vec<LogQuery>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            eprintln!("Failed to read file {}: {:?}", self.path, e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut queries = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            queries.push((record.value, record.base));
        }
        Ok(queries)
    }
}

#[async_trait::async_trait]
impl QueryStreamer for CsvStreamer {
    async fn run_stream(self, sender: Sender<Vec<LogQuery>>) -> Result<(), Error> {
        let all_queries = self.parse_csv_to_queries()?;
        let total_queries = all_queries.len();
        let mut queries_sent = 0;

        println!(
            "CsvStreamer: Starting transfer of {} queries...",
            total_queries
        );

        for chunk in all_queries.chunks(self.batch_size) {
            let batch: Vec<LogQuery> = chunk.to_vec();
            if let Err(e) = sender.send(batch).await {
                eprintln!(
                    "CsvStreamer shutting down: Evaluator receiver dropped during send. Error: {}",
                    e
                );
                return Err(Error::ChannelSendFailed);
            }

            queries_sent += chunk.len();
        }

        println!(
            "CsvStreamer: Successfully transferred {} queries in batches.",
            queries_sent
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
id,x,base,label
1,8.0,2.0,cube
2,100.0,10.0,decimal
3,0.25,2.0,fractional
4,9.0,-3.0,invalid-base
";

    const BATCH_SIZE: usize = 10;

    #[test]
    fn test_parse_csv_to_queries_success() {
        // Create a temporary file with the mock content.
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(MOCK_CSV_CONTENT.as_bytes())
            .expect("Failed to write mock content");

        let path = temp_file
            .path()
            .to_str()
            .expect("Failed to get path string");

        let streamer = CsvStreamer::new(path.to_string(), BATCH_SIZE);
        let result = streamer.parse_csv_to_queries();

        assert!(
            result.is_ok(),
            "Parsing failed with error: {:?}",
            result.err()
        );

        let queries = result.unwrap();

        // Domain validation happens downstream in the evaluator; the parser
        // keeps even the row with the invalid base.
        let expected_queries: Vec<LogQuery> =
            vec![(8.0, 2.0), (100.0, 10.0), (0.25, 2.0), (9.0, -3.0)];

        assert_eq!(queries.len(), 4, "Should have parsed 4 queries.");
        assert_eq!(
            queries, expected_queries,
            "Parsed queries do not match expected data."
        );
    }

    #[test]
    fn test_parse_csv_to_queries_file_not_found() {
        let streamer = CsvStreamer::new("non_existent_file.csv".to_string(), BATCH_SIZE);
        let result = streamer.parse_csv_to_queries();

        assert!(
            result.is_err(),
            "Should have failed to open non-existent file."
        );

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result.err());
        }
    }

    #[test]
    fn test_parse_csv_to_queries_malformed_row() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"id,x,base\n1,eight,2.0\n")
            .expect("Failed to write mock content");

        let path = temp_file
            .path()
            .to_str()
            .expect("Failed to get path string");

        let streamer = CsvStreamer::new(path.to_string(), BATCH_SIZE);
        let result = streamer.parse_csv_to_queries();

        assert!(matches!(result, Err(Error::CsvError(_))));
    }
}
