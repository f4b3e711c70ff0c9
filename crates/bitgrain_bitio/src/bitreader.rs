use std::mem;

use bitgrain_bytes::ByteSource;

use crate::{BitCode, BitError, BitField, MASKS};

/// a bit-granular reader over a byte source.
///
/// keeps up to 64 bits of lookahead pulled from the source in `buffer`,
/// logically right-aligned. `shift` counts the valid, not yet consumed
/// bits in the buffer, from the low end up.
pub struct BitReader<S: ByteSource> {
    buffer: u64,
    shift: usize,
    source: S,
}

impl<S: ByteSource> BitReader<S> {
    /// binds the reader to a source and performs the initial buffer fill.
    pub fn new(source: S) -> Result<Self, BitError> {
        let mut reader = Self {
            buffer: 0,
            shift: 0,
            source,
        };
        reader.refill()?;
        Ok(reader)
    }

    /// current position in the bitstream, in bits.
    #[must_use]
    pub fn position(&self) -> usize {
        // the source cursor sits past the buffered bytes; the unconsumed
        // buffer bits back it off to the true bit cursor.
        self.source.position() * 8 - self.shift
    }

    /// number of bits left for reading.
    #[must_use]
    pub fn available(&self) -> usize {
        self.source.available() * 8 + self.shift
    }

    /// moves the cursor to an absolute bit position.
    ///
    /// fails with [`BitError::SeekOutOfRange`] past the end of the stream,
    /// leaving the reader where it was.
    pub fn seek(&mut self, bitpos: usize) -> Result<(), BitError> {
        let total_bits = (self.source.position() + self.source.available()) * 8;
        if bitpos > total_bits {
            return Err(BitError::SeekOutOfRange);
        }

        self.source.seek(bitpos / 8)?;
        self.shift = 0;
        self.skip(bitpos % 8)
    }

    /// advances the cursor by `bits`.
    ///
    /// fails with [`BitError::EndOfStream`] without moving the cursor when
    /// fewer than `bits` bits remain.
    pub fn skip(&mut self, bits: usize) -> Result<(), BitError> {
        if bits > self.available() {
            return Err(BitError::EndOfStream);
        }

        if bits < self.shift {
            self.shift -= bits;
        } else if bits == self.shift {
            self.refill()?;
        } else {
            let to_skip = bits - self.shift;
            self.shift = 0;
            self.source.skip(to_skip / 8)?;
            self.refill()?;
            // the refill loads whole bytes; dropping the sub-byte residue
            // off `shift` lands inside the freshly loaded buffer.
            self.shift -= to_skip % 8;
        }

        Ok(())
    }

    /// skips forward to the next multiple of `bits`. no-op when already
    /// aligned.
    pub fn align(&mut self, bits: usize) -> Result<(), BitError> {
        debug_assert!(bits > 0);

        let advance = (bits - self.position() % bits) % bits;
        if advance > 0 {
            self.skip(advance)?;
        }
        Ok(())
    }

    /// reads `bits` bits into a value of type `T`, consuming them.
    ///
    /// `bits` must lie within `T`'s `[MIN_BITS, MAX_BITS]` range; signed
    /// types sign-extend from the requested width.
    pub fn read<T: BitField>(&mut self, bits: usize) -> Result<T, BitError> {
        debug_assert!(bits >= T::MIN_BITS && bits <= T::MAX_BITS);

        let raw = self.read_raw(bits)?;
        T::from_raw(raw, bits)
    }

    /// reads `bits` bits without advancing the cursor.
    ///
    /// runs a normal read on a throwaway clone of the reader state whose
    /// source cursor is forked, so the live reader stays untouched even
    /// when the speculative read crosses a refill. errors exactly like
    /// [`BitReader::read`].
    pub fn peek<T: BitField>(&self, bits: usize) -> Result<T, BitError> {
        debug_assert!(bits >= T::MIN_BITS && bits <= T::MAX_BITS);

        let mut speculative = Self {
            buffer: self.buffer,
            shift: self.shift,
            source: self.source.fork()?,
        };
        let raw = speculative.read_raw(bits)?;
        T::from_raw(raw, bits)
    }

    /// reads a single bit.
    pub fn read_bool(&mut self) -> Result<bool, BitError> {
        self.read_raw(1).map(|bit| bit == 1)
    }

    /// reads a composite value through its codec.
    pub fn read_code<C: BitCode>(&mut self) -> Result<C::Value, BitError> {
        C::read(self)
    }

    fn read_raw(&mut self, bits: usize) -> Result<u64, BitError> {
        debug_assert!(bits <= 64);

        if bits == 0 {
            return Ok(0);
        }
        if bits > self.available() {
            return Err(BitError::EndOfStream);
        }

        if bits <= self.shift {
            let value = self.extract(bits);
            if self.shift == 0 {
                self.refill()?;
            }
            Ok(value)
        } else {
            // the buffered bits become the high end of the result; the
            // rest comes out of the freshly loaded buffer. `bits <= 64`
            // means a single refill always suffices.
            let tail_bits = bits - self.shift;
            let head = if self.shift > 0 {
                self.extract(self.shift) << tail_bits
            } else {
                0
            };
            self.refill()?;
            Ok(head | self.extract(tail_bits))
        }
    }

    #[inline]
    fn extract(&mut self, bits: usize) -> u64 {
        self.shift -= bits;
        (self.buffer >> self.shift) & MASKS[bits]
    }

    fn refill(&mut self) -> Result<(), BitError> {
        let want = self.source.available().min(mem::size_of::<u64>());
        let loaded = self.source.get_n(&mut self.buffer, want)?;
        self.shift = 8 * loaded;
        Ok(())
    }
}
