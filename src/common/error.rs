use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum QRError {
    // Matrix source
    #[error("Empty content")]
    EmptyContent,
    #[error("Unsupported character set: {0}")]
    UnsupportedCharset(String),
    #[error("Invalid error correction level: {0}")]
    InvalidECLevel(String),
    #[error("Encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    // Synthesis
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Grid is {found_w}x{found_h}, expected {exp_w}x{exp_h}")]
    DimensionMismatch { exp_w: u32, exp_h: u32, found_w: u32, found_h: u32 },
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    // Persistence
    #[error("Image codec failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QRResult<T> = Result<T, QRError>;
