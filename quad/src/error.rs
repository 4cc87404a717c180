use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to encode frame: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to write timing records: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to prepare output location: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
