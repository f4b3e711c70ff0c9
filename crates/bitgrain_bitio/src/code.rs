use bitgrain_bytes::{ByteSink, ByteSource};

use crate::{BitError, BitReader, BitWriter};

/// a stateless codec tying a composite value type to primitive bit
/// operations.
///
/// implementations hold no state of their own; they are pure consumers of
/// the reader/writer public contract and pick their own natural bit
/// widths.
pub trait BitCode {
    type Value;

    fn read<S: ByteSource>(reader: &mut BitReader<S>) -> Result<Self::Value, BitError>;

    fn write<K: ByteSink>(writer: &mut BitWriter<K>, value: &Self::Value) -> Result<(), BitError>;
}
