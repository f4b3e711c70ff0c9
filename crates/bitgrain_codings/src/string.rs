use bitgrain_bitio::{BitCode, BitError, BitReader, BitWriter};
use bitgrain_bytes::{ByteSink, ByteSource};

/// null-terminated string of opaque 8-bit code units.
///
/// no text encoding is assumed or validated; the terminating zero byte is
/// not part of the value.
pub struct StringNullTerm;

impl BitCode for StringNullTerm {
    type Value = Vec<u8>;

    fn read<S: ByteSource>(reader: &mut BitReader<S>) -> Result<Vec<u8>, BitError> {
        let mut units = Vec::new();
        loop {
            let unit = reader.read::<u8>(8)?;
            if unit == 0 {
                break;
            }
            units.push(unit);
        }
        Ok(units)
    }

    fn write<K: ByteSink>(writer: &mut BitWriter<K>, value: &Vec<u8>) -> Result<(), BitError> {
        for &unit in value {
            writer.write(unit, 8)?;
        }
        writer.write::<u8>(0, 8)
    }
}
