use std::sync::Arc;

use crate::{ByteSource, StoreError};

/// a byte source over immutable in-memory data.
///
/// the backing bytes are reference counted, so [`ByteSource::fork`] only
/// duplicates the cursor.
#[derive(Debug, Clone)]
pub struct MemoryByteSource {
    data: Arc<[u8]>,
    pos: usize,
}

impl MemoryByteSource {
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// total size of the backing data in bytes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ByteSource for MemoryByteSource {
    fn get_n(&mut self, acc: &mut u64, bytes: usize) -> Result<usize, StoreError> {
        let n = bytes.min(self.available());
        let mut packed = 0u64;
        for &byte in &self.data[self.pos..self.pos + n] {
            packed = (packed << 8) | u64::from(byte);
        }
        self.pos += n;
        *acc = packed;
        Ok(n)
    }

    // an in-memory buffer never receives additional data.
    #[inline]
    fn depleted(&self) -> bool {
        true
    }

    #[inline]
    fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    fn seek(&mut self, position: usize) -> Result<(), StoreError> {
        if position > self.data.len() {
            return Err(StoreError::OutOfBounds);
        }
        self.pos = position;
        Ok(())
    }

    fn skip(&mut self, bytes: usize) -> Result<(), StoreError> {
        if bytes > self.available() {
            return Err(StoreError::OutOfBounds);
        }
        self.pos += bytes;
        Ok(())
    }

    fn fork(&self) -> Result<Self, StoreError> {
        Ok(self.clone())
    }
}
