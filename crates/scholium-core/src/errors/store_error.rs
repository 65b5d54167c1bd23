/// Persistence-layer errors.
///
/// Surfaced to the caller unchanged; retry policy belongs to the store
/// implementation, never to this core.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {message}")]
    Backend { message: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("transaction failed: {reason}")]
    Transaction { reason: String },
}
