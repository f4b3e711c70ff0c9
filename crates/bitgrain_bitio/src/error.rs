use bitgrain_bytes::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum BitError {
    #[error("was about to read beyond the end of the bitstream")]
    EndOfStream,
    #[error("seek target lies outside of the bitstream")]
    SeekOutOfRange,
    #[error("value {0:#x} is not a declared enum discriminant")]
    InvalidDiscriminant(u64),
    #[error("malformed variable-length code")]
    MalformedCode,
    #[error(transparent)]
    Store(#[from] StoreError),
}
