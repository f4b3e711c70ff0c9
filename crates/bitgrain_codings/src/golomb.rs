use std::marker::PhantomData;

use bitgrain_bitio::{BitCode, BitError, BitField, BitReader, BitWriter};
use bitgrain_bytes::{ByteSink, ByteSource};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// marker for the unsigned integer types an exp-Golomb code can carry.
pub trait UnsignedValue: BitField + Copy + sealed::Sealed {}

impl UnsignedValue for u8 {}
impl UnsignedValue for u16 {}
impl UnsignedValue for u32 {}
impl UnsignedValue for u64 {}

/// exponential-Golomb code of order 0 over an unsigned integer type.
///
/// a value `x` is stored as the bit length of `x + 1` in unary (that many
/// zero bits), a terminating one bit, and then the low bits of `x + 1`:
///
/// ```text
/// 0     -> 1
/// 1     -> 010
/// 2     -> 011
/// 3     -> 00100
/// ```
///
/// the arithmetic runs in u128 so that `T::MAX` round-trips; for
/// `u64::MAX` the prefix is 64 zeros and `x + 1` needs a 65th bit.
pub struct ExpGolombK0<T>(PhantomData<T>);

impl<T: UnsignedValue> BitCode for ExpGolombK0<T> {
    type Value = T;

    fn read<S: ByteSource>(reader: &mut BitReader<S>) -> Result<T, BitError> {
        let mut counter = 0usize;
        while !reader.read_bool()? {
            counter += 1;
            if counter > T::MAX_BITS {
                return Err(BitError::MalformedCode);
            }
        }

        let extra = reader.read::<u64>(counter)?;
        let value = ((1u128 << counter) | u128::from(extra)) - 1;
        if value > (1u128 << T::MAX_BITS) - 1 {
            return Err(BitError::MalformedCode);
        }

        T::from_raw(value as u64, T::MAX_BITS)
    }

    fn write<K: ByteSink>(writer: &mut BitWriter<K>, value: &T) -> Result<(), BitError> {
        let raw = (*value).into_raw();
        if raw == 0 {
            return writer.write::<u8>(1, 1);
        }

        let succ = u128::from(raw) + 1;
        let counter = (127 - succ.leading_zeros()) as usize;

        writer.write::<u64>(0, counter)?;
        writer.write::<u8>(1, 1)?;
        // the truncating cast loses the 65th bit of `x + 1`, which is
        // exactly the bit the terminating one above already carries.
        writer.write::<u64>(succ as u64, counter)
    }
}
