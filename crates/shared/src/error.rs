//! Wire protocol errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed server message: {0}")]
    Decode(#[from] serde_json::Error),
}
