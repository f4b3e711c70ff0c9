mod error;
mod file;
mod memory;
mod sink;
mod store;

pub use error::StoreError;
pub use file::FileByteSource;
pub use memory::MemoryByteSource;
pub use sink::VecSink;
pub use store::{ByteSink, ByteSource};
