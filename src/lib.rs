#[cfg(feature = "bitio")]
pub use bitgrain_bitio as bitio;

#[cfg(feature = "bytes")]
pub use bitgrain_bytes as bytes;

#[cfg(feature = "codings")]
pub use bitgrain_codings as codings;
