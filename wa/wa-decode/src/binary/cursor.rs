//! Byte cursor with offset tracking and little-endian primitives.

use super::{DecodeError, Result};

/// Read-only cursor over a borrowed byte slice.
///
/// The offset never exceeds `data.len()`. Reads that would run past the end
/// fail with [`DecodeError::Truncated`] and leave the offset untouched.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Create a cursor positioned at `offset`.
    pub fn at(data: &'a [u8], offset: usize) -> Result<Self> {
        if offset > data.len() {
            return Err(DecodeError::Truncated {
                offset: data.len(),
                needed: offset - data.len(),
                available: 0,
            });
        }
        Ok(Self { data, pos: offset })
    }

    /// Current absolute byte offset within the underlying slice.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Remaining unread length.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True if at end of input.
    pub fn is_eof(&self) -> bool {
        self.pos == self.data.len()
    }

    /// The whole underlying buffer, independent of the offset.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    fn truncated(&self, needed: usize) -> DecodeError {
        DecodeError::Truncated {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }

    /// Peek next byte without advancing.
    pub fn peek_u8(&self) -> Result<u8> {
        self.data.get(self.pos).copied().ok_or_else(|| self.truncated(1))
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Ok(b)
    }

    /// Read exactly n bytes and return a slice view into the underlying data.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.truncated(n));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Skip exactly n bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let b = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(b);
        Ok(out)
    }

    /// Read little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Read little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }
}
