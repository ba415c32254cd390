use async_trait::async_trait;
use shared::domain::RawRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("schedule source unreachable: {0}")]
    Unreachable(String),
    #[error("schedule source could not be decoded: {0}")]
    Undecodable(String),
}

/// Supplies raw rows. Transport and file format live behind this seam.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable origin used in logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError>;
}
