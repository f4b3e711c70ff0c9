mod golomb;
mod string;

pub use golomb::{ExpGolombK0, UnsignedValue};
pub use string::StringNullTerm;
