#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("access beyond the boundaries of the byte store")]
    OutOfBounds,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
