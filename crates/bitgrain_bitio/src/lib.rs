mod bitreader;
mod bitwriter;
mod code;
mod common;
mod error;
mod field;

pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
pub use code::BitCode;
pub use error::BitError;
pub use field::BitField;

pub(crate) use common::*;
