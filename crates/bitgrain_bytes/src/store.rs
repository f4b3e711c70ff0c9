use crate::StoreError;

/// a linear, seekable store of bytes that a bit reader pulls from.
///
/// the store keeps a byte-granular cursor; all offsets are relative to the
/// beginning of the backing data.
pub trait ByteSource {
    /// packs up to `bytes` bytes into the low bits of `acc`, most significant
    /// byte first, and advances the cursor. returns the number of bytes
    /// actually packed, which is bounded by [`ByteSource::available`].
    fn get_n(&mut self, acc: &mut u64, bytes: usize) -> Result<usize, StoreError>;

    /// whether the store can ever grow. a depleted store will never report
    /// more than the currently known size.
    fn depleted(&self) -> bool;

    /// bytes between the cursor and the end of the store.
    fn available(&self) -> usize;

    /// byte offset of the cursor.
    fn position(&self) -> usize;

    /// moves the cursor to an absolute byte offset.
    fn seek(&mut self, position: usize) -> Result<(), StoreError>;

    /// advances the cursor by `bytes`.
    fn skip(&mut self, bytes: usize) -> Result<(), StoreError>;

    /// returns an independent cursor over the same backing bytes. forking
    /// never copies the data itself, only the cursor state, so speculative
    /// reads through the fork cannot disturb the original.
    fn fork(&self) -> Result<Self, StoreError>
    where
        Self: Sized;
}

/// a linear store of bytes that a bit writer pushes completed bytes into.
pub trait ByteSink {
    /// appends one byte. `bits` says how many high-order bits of `byte` are
    /// meaningful (at most 8); the rest are zero padding.
    fn put(&mut self, byte: u8, bits: usize) -> Result<(), StoreError>;

    /// bytes written so far.
    fn position(&self) -> usize;
}
