//! Error types for the transcoding pipeline.

/// Errors that can occur while transcoding an image.
///
/// The pipeline is deterministic, so none of these are worth retrying;
/// they are returned to the caller as-is. Numeric edge cases (index
/// clamping, zero-row clamping) saturate instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A render parameter failed validation at pipeline entry.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The decoded source image is structurally unusable.
    #[error("invalid image: {0}")]
    InvalidImage(String),
    /// The external decoder rejected the source bytes.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}
