//! Error types shared by the loaders, cost model validation and report writers
//!
//! The projection itself never fails; errors only arise at the boundary
//! (rejecting malformed inputs or cost models) and when writing output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoiError {
    /// An input field failed strict validation
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// A cost model value is unusable for projection
    #[error("invalid cost model `{field}`: {reason}")]
    InvalidCostModel {
        field: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoiError>;
