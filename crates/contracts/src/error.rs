use thiserror::Error;

/// Error taxonomy of the domain core.
///
/// Both conditions are local and recoverable: the rendering layer only
/// offers actions for records it already displays, so hitting either one
/// indicates a caller defect rather than a runtime fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An operation referenced a member id absent from the store.
    #[error("no member record with id '{0}'")]
    NotFound(String),

    /// A rank index fell outside the rank scale.
    #[error("rank index {index} out of range for scale of length {len}")]
    OutOfRange { index: usize, len: usize },
}
