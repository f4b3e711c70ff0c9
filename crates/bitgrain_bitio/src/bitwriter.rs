use bitgrain_bytes::ByteSink;

use crate::{BitCode, BitError, BitField, MASKS};

const BUFFER_BITS: usize = 8;

/// a bit-granular writer over a byte sink.
///
/// packs bits into a single byte accumulator, high bits first; every
/// completed byte is pushed to the sink. `avail` counts the free bit
/// slots left in the accumulator.
pub struct BitWriter<K: ByteSink> {
    sink: K,
    buffer: u8,
    avail: usize,
}

impl<K: ByteSink> BitWriter<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            buffer: 0,
            avail: BUFFER_BITS,
        }
    }

    /// current position in the output bitstream, in bits.
    #[must_use]
    pub fn position(&self) -> usize {
        self.sink.position() * 8 + (BUFFER_BITS - self.avail)
    }

    /// writes the low `bits` bits of `value`, most significant bit first.
    ///
    /// `bits` must lie within `T`'s `[MIN_BITS, MAX_BITS]` range. writing
    /// zero bits is a no-op.
    pub fn write<T: BitField>(&mut self, value: T, bits: usize) -> Result<(), BitError> {
        debug_assert!(bits >= T::MIN_BITS && bits <= T::MAX_BITS);
        self.write_raw(value.into_raw(), bits)
    }

    /// writes a composite value through its codec.
    pub fn write_code<C: BitCode>(&mut self, value: &C::Value) -> Result<(), BitError> {
        C::write(self, value)
    }

    /// force-emits a partially filled byte, zero-padded in the low bits.
    /// does nothing when the cursor is byte aligned.
    pub fn flush(&mut self) -> Result<(), BitError> {
        if self.avail != BUFFER_BITS {
            self.flush_byte()?;
        }
        Ok(())
    }

    /// advances the cursor by `bits` implicit zero bits.
    pub fn skip(&mut self, bits: usize) -> Result<(), BitError> {
        if bits < self.avail {
            self.avail -= bits;
        } else if bits == self.avail {
            self.avail = 0;
            self.flush_byte()?;
        } else {
            let mut to_skip = bits - self.avail;
            self.avail = 0;
            self.flush_byte()?;

            // one zero byte per full buffer width left to skip.
            while to_skip >= BUFFER_BITS {
                to_skip -= BUFFER_BITS;
                self.avail = 0;
                self.flush_byte()?;
            }

            self.avail -= to_skip;
        }

        Ok(())
    }

    /// skips zero bits forward to the next multiple of `bits`. no-op when
    /// already aligned.
    pub fn align(&mut self, bits: usize) -> Result<(), BitError> {
        debug_assert!(bits > 0);

        let advance = (bits - self.position() % bits) % bits;
        if advance > 0 {
            self.skip(advance)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get_ref(&self) -> &K {
        &self.sink
    }

    /// hands the sink back. a partially filled byte is not flushed; call
    /// [`BitWriter::flush`] first when the trailing bits matter.
    #[must_use]
    pub fn into_inner(self) -> K {
        self.sink
    }

    fn write_raw(&mut self, data: u64, bits: usize) -> Result<(), BitError> {
        debug_assert!(bits <= 64);

        let mut written = 0;
        while written < bits {
            // the widest portion that still fits the accumulator, taken
            // from the most significant end of the remaining value.
            let portion = self.avail.min(bits - written);
            let chunk = (data >> (bits - written - portion)) & MASKS[portion];
            self.buffer |= (chunk as u8) << (self.avail - portion);
            self.avail -= portion;

            if self.avail == 0 {
                self.flush_byte()?;
            }

            written += portion;
        }

        Ok(())
    }

    fn flush_byte(&mut self) -> Result<(), BitError> {
        self.sink.put(self.buffer, BUFFER_BITS - self.avail)?;
        self.buffer = 0;
        self.avail = BUFFER_BITS;
        Ok(())
    }
}
