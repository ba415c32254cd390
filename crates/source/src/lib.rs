//! Data-source collaborators: CSV text from a local file or over HTTP(S).

use std::{io::Read, path::PathBuf, time::Duration};

use async_trait::async_trait;
use schedule_core::{LoadError, RecordSource};
use shared::domain::RawRecord;
use tracing::debug;
use url::Url;

/// Decodes CSV with a header row into records keyed by header name.
///
/// Blank lines are skipped. Short rows simply lack the trailing keys and long
/// rows lose the surplus fields; neither is an error.
pub fn decode_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|err| LoadError::Undecodable(err.to_string()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|err| LoadError::Undecodable(err.to_string()))?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        records.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        );
    }
    Ok(records)
}

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            LoadError::Unreachable(format!("failed to read '{}': {err}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read schedule csv");
        decode_csv(bytes.as_slice())
    }
}

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct HttpCsvSource {
    url: Url,
    timeout: Duration,
}

impl HttpCsvSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Bounds the whole request, body included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl RecordSource for HttpCsvSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| LoadError::Unreachable(format!("failed to build http client: {err}")))?;
        let response = client
            .get(self.url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| LoadError::Unreachable(err.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|err| LoadError::Unreachable(err.to_string()))?;
        debug!(url = %self.url, bytes = body.len(), "downloaded schedule csv");
        decode_csv(body.as_ref())
    }
}

/// `http://` and `https://` locations are fetched over the network; anything
/// else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn RecordSource> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Box::new(HttpCsvSource::new(url)),
        _ => Box::new(CsvFileSource::new(location)),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
