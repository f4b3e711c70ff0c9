use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::{ByteSource, StoreError};

const WINDOW_SIZE: usize = 32 * 1024;

/// a byte source over a regular file, read through an internal window.
///
/// the logical cursor is tracked separately from the OS file offset; every
/// window load seeks explicitly before reading. this keeps forks safe even
/// though [`File::try_clone`] shares the underlying file description, as
/// long as the forks stay on one thread.
#[derive(Debug)]
pub struct FileByteSource {
    file: File,
    len: usize,
    pos: usize,
    window: Vec<u8>,
    window_start: usize,
}

impl FileByteSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = File::open(path)?;
        let len = file.metadata()?.len() as usize;
        Ok(Self {
            file,
            len,
            pos: 0,
            window: Vec::new(),
            window_start: 0,
        })
    }

    /// total size of the file in bytes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn load_window(&mut self) -> Result<(), StoreError> {
        self.window_start = self.pos;
        let want = WINDOW_SIZE.min(self.len - self.pos);
        self.file.seek(SeekFrom::Start(self.pos as u64))?;
        self.window.resize(want, 0);
        self.file.read_exact(&mut self.window)?;
        Ok(())
    }

    fn byte_at_cursor(&mut self) -> Result<u8, StoreError> {
        if self.pos < self.window_start || self.pos >= self.window_start + self.window.len() {
            self.load_window()?;
        }
        Ok(self.window[self.pos - self.window_start])
    }
}

impl ByteSource for FileByteSource {
    fn get_n(&mut self, acc: &mut u64, bytes: usize) -> Result<usize, StoreError> {
        let n = bytes.min(self.available());
        let mut packed = 0u64;
        for _ in 0..n {
            packed = (packed << 8) | u64::from(self.byte_at_cursor()?);
            self.pos += 1;
        }
        *acc = packed;
        Ok(n)
    }

    // regular files report their full size up front.
    #[inline]
    fn depleted(&self) -> bool {
        true
    }

    #[inline]
    fn available(&self) -> usize {
        self.len - self.pos
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    fn seek(&mut self, position: usize) -> Result<(), StoreError> {
        if position > self.len {
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

    /// the fork owns a duplicated file handle and an empty window; the
    /// first read through it loads its own window at its own cursor.
    fn fork(&self) -> Result<Self, StoreError> {
        Ok(Self {
            file: self.file.try_clone()?,
            len: self.len,
            pos: self.pos,
            window: Vec::new(),
            window_start: 0,
        })
    }
}
