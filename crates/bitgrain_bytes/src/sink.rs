use crate::{ByteSink, StoreError};

/// a growable in-memory byte sink.
#[derive(Debug, Default)]
pub struct VecSink {
    data: Vec<u8>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

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

impl ByteSink for VecSink {
    fn put(&mut self, byte: u8, _bits: usize) -> Result<(), StoreError> {
        self.data.push(byte);
        Ok(())
    }

    #[inline]
    fn position(&self) -> usize {
        self.data.len()
    }
}
