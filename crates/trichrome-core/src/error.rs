use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("pixel access out of range: ({row}, {col}) outside {rows}x{cols}")]
    OutOfRange {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("histogram error: {0}")]
    Histogram(String),

    #[error("filter error: {0}")]
    Filter(String),
}

pub type Result<T> = std::result::Result<T, AlignError>;
