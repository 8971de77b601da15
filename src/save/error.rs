use thiserror::Error;

/// Failure talking to the blob store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}

/// Failure loading or persisting a save.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The blob is not a save this version can read. Recoverable by starting
    /// a fresh game.
    #[error("invalid save data: {0}")]
    InvalidSaveData(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
