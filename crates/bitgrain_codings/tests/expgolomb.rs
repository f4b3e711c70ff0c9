use bitgrain_bitio::{BitError, BitReader, BitWriter};
use bitgrain_bytes::{MemoryByteSource, VecSink};
use bitgrain_codings::ExpGolombK0;

fn reader(bytes: &[u8]) -> BitReader<MemoryByteSource> {
    BitReader::new(MemoryByteSource::new(bytes)).unwrap()
}

#[test]
fn test_decode_sequence() {
    // 1 010 011 00100 0(000): 0, 1, 2, 3.
    let mut r = reader(&[0b1010_0110, 0b0100_0000]);
    assert_eq!(r.read_code::<ExpGolombK0<u32>>().unwrap(), 0);
    assert_eq!(r.read_code::<ExpGolombK0<u32>>().unwrap(), 1);
    assert_eq!(r.read_code::<ExpGolombK0<u32>>().unwrap(), 2);
    assert_eq!(r.read_code::<ExpGolombK0<u32>>().unwrap(), 3);
}

#[test]
fn test_encode_sequence() {
    let mut w = BitWriter::new(VecSink::new());
    for value in 0u32..4 {
        w.write_code::<ExpGolombK0<u32>>(&value).unwrap();
    }
    w.flush().unwrap();
    assert_eq!(w.get_ref().as_slice(), &[0b1010_0110, 0b0100_0000]);
}

#[test]
fn test_encode_zero_is_one_bit() {
    let mut w = BitWriter::new(VecSink::new());
    w.write_code::<ExpGolombK0<u8>>(&0).unwrap();
    assert_eq!(w.position(), 1);
    w.flush().unwrap();
    assert_eq!(w.get_ref().as_slice(), &[0x80]);
}

#[test]
fn test_roundtrip_u8_exhaustive() {
    let mut w = BitWriter::new(VecSink::new());
    for value in 0..=u8::MAX {
        w.write_code::<ExpGolombK0<u8>>(&value).unwrap();
    }
    w.flush().unwrap();

    let mut r = BitReader::new(MemoryByteSource::new(
        w.into_inner().into_bytes(),
    ))
    .unwrap();
    for value in 0..=u8::MAX {
        assert_eq!(r.read_code::<ExpGolombK0<u8>>().unwrap(), value);
    }
}

#[test]
fn test_roundtrip_type_extremes() {
    let mut w = BitWriter::new(VecSink::new());
    w.write_code::<ExpGolombK0<u16>>(&u16::MAX).unwrap();
    w.write_code::<ExpGolombK0<u32>>(&u32::MAX).unwrap();
    w.write_code::<ExpGolombK0<u64>>(&u64::MAX).unwrap();
    w.write_code::<ExpGolombK0<u64>>(&(u64::MAX - 1)).unwrap();
    w.flush().unwrap();

    let mut r = BitReader::new(MemoryByteSource::new(
        w.into_inner().into_bytes(),
    ))
    .unwrap();
    assert_eq!(r.read_code::<ExpGolombK0<u16>>().unwrap(), u16::MAX);
    assert_eq!(r.read_code::<ExpGolombK0<u32>>().unwrap(), u32::MAX);
    assert_eq!(r.read_code::<ExpGolombK0<u64>>().unwrap(), u64::MAX);
    assert_eq!(r.read_code::<ExpGolombK0<u64>>().unwrap(), u64::MAX - 1);
}

#[test]
fn test_decode_prefix_too_long_for_type() {
    // nothing but zero bits: the unary prefix outgrows u8 before the
    // stream runs dry.
    let mut r = reader(&[0x00, 0x00]);
    assert!(matches!(
        r.read_code::<ExpGolombK0<u8>>(),
        Err(BitError::MalformedCode)
    ));
}

#[test]
fn test_decode_value_too_large_for_type() {
    // prefix 8, payload 0xFF: decodes to 510, which no u8 can carry.
    let mut r = reader(&[0b0000_0000, 0b1111_1111, 0b1000_0000]);
    assert!(matches!(
        r.read_code::<ExpGolombK0<u8>>(),
        Err(BitError::MalformedCode)
    ));
}

#[test]
fn test_decode_truncated_stream() {
    // prefix promises 5 payload bits, only 2 are left after the marker.
    let mut r = reader(&[0b0000_0100]);
    let err = r.read_code::<ExpGolombK0<u32>>();
    assert!(matches!(err, Err(BitError::EndOfStream)));
}
