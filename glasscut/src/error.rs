use crate::fsize;
use thiserror::Error;

/// Failures that abort a single catalog registration or packing call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutError {
    /// A stock sheet was registered with a non-positive (or non-finite) dimension
    #[error("invalid stock sheet spec for {code}: {reason}")]
    InvalidSpec { code: String, reason: String },
    /// No stock sheet is registered under this material code
    #[error("no stock sheet available for material code {0}")]
    UnknownMaterial(String),
    /// A piece does not fit the stock sheet in any allowed orientation
    #[error("piece {index} ({width}x{height}) does not fit the stock sheet in any orientation")]
    UnfittablePiece {
        index: usize,
        width: fsize,
        height: fsize,
    },
    /// A demand line with a non-positive dimension or quantity
    #[error("malformed demand: {0}")]
    MalformedDemand(String),
}
