//! Higher-level binary helpers: length-prefixed strings, vectors, and a
//! cursor wrapper that reports each decode to a [`LogSink`].

use super::{
    cursor::Cursor,
    leb128::{self, DecodedInteger, IntWidth},
    DecodeError, Result,
};
use crate::log::{Level, LogSink, NullSink};

/// Owned copy of a length-prefixed byte string. May contain zero bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DecodedString {
    bytes: Vec<u8>,
}

impl DecodedString {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// UTF-8 view of the bytes, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for DecodedString {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for DecodedString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Read a length-prefixed byte string (u32 length via ULEB128).
///
/// The cursor only moves if both the length and the payload are present.
pub fn read_string(cur: &mut Cursor) -> Result<DecodedString> {
    let mut c = *cur;
    let len = leb128::read_u32(&mut c)? as usize;
    let bytes = c.read_bytes(len)?.to_vec();
    *cur = c;
    Ok(DecodedString::from(bytes))
}

/// Slice/offset form of [`read_string`]: returns the string and the offset
/// of the first unread byte.
pub fn read_string_at(buf: &[u8], offset: usize) -> Result<(DecodedString, usize)> {
    let mut cur = Cursor::at(buf, offset)?;
    let s = read_string(&mut cur)?;
    Ok((s, cur.offset()))
}

/// Read a UTF-8 name (length-prefixed bytes).
pub fn read_name(cur: &mut Cursor) -> Result<String> {
    let start = cur.offset();
    let mut c = *cur;
    let s = read_string(&mut c)?;
    let name = String::from_utf8(s.into_bytes())
        .map_err(|_| DecodeError::InvalidUtf8 { offset: start })?;
    *cur = c;
    Ok(name)
}

/// Read a vector of T using the provided element reader closure.
/// Length is encoded as ULEB128 u32.
pub fn read_vec<T, F>(cur: &mut Cursor, mut elem: F) -> Result<Vec<T>>
where
    F: FnMut(&mut Cursor) -> Result<T>,
{
    let mut c = *cur;
    let len = leb128::read_u32(&mut c)? as usize;
    // Each element takes at least one byte; don't trust the prefix for capacity.
    let mut out = Vec::with_capacity(len.min(c.remaining()));
    for i in 0..len {
        let item = elem(&mut c).map_err(|e| e.nest(format!("vector element {i} of {len}")))?;
        out.push(item);
    }
    *cur = c;
    Ok(out)
}

/// A cursor paired with a diagnostic sink.
///
/// Every successful read is reported at trace level; failures at debug level.
pub struct Reader<'a, S: LogSink = NullSink> {
    cur: Cursor<'a>,
    sink: S,
}

impl<'a> Reader<'a, NullSink> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_sink(data, NullSink)
    }
}

impl<'a, S: LogSink> Reader<'a, S> {
    pub fn with_sink(data: &'a [u8], sink: S) -> Self {
        Self {
            cur: Cursor::new(data),
            sink,
        }
    }

    pub fn offset(&self) -> usize {
        self.cur.offset()
    }

    pub fn remaining(&self) -> usize {
        self.cur.remaining()
    }

    pub fn is_eof(&self) -> bool {
        self.cur.is_eof()
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cur
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run `f` on the inner cursor and report the outcome.
    fn traced<T, F>(&mut self, what: &str, f: F) -> Result<T>
    where
        T: std::fmt::Debug,
        F: FnOnce(&mut Cursor<'a>) -> Result<T>,
    {
        let start = self.cur.offset();
        match f(&mut self.cur) {
            Ok(v) => {
                self.sink.log_fmt(
                    Level::Trace,
                    format_args!("{what} at {start}..{}: {v:?}", self.cur.offset()),
                );
                Ok(v)
            }
            Err(e) => {
                self.sink.log_fmt(Level::Debug, format_args!("{what} at {start} failed: {e}"));
                Err(e)
            }
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.traced("u8", |c| c.read_u8())
    }

    /// Fixed-width little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.traced("u32le", |c| c.read_u32_le())
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.traced("u64le", |c| c.read_u64_le())
    }

    /// Raw bytes; only the length is logged.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let start = self.cur.offset();
        let len = self.traced("bytes", |c| c.read_bytes(n).map(<[u8]>::len))?;
        Ok(&self.cur.data()[start..start + len])
    }

    pub fn decode_unsigned(&mut self, max_bits: u32) -> Result<u64> {
        self.traced("uleb", |c| leb128::decode_unsigned(c, max_bits))
    }

    pub fn decode_signed(&mut self, max_bits: u32) -> Result<i64> {
        self.traced("sleb", |c| leb128::decode_signed(c, max_bits))
    }

    pub fn decode_integer(&mut self, width: IntWidth) -> Result<DecodedInteger> {
        self.traced("leb", |c| leb128::decode_integer(c, width))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.traced("uleb32", leb128::read_u32)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.traced("sleb32", leb128::read_i32)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.traced("uleb64", leb128::read_u64)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.traced("sleb64", leb128::read_i64)
    }

    pub fn read_string(&mut self) -> Result<DecodedString> {
        self.traced("string", read_string)
    }

    pub fn read_name(&mut self) -> Result<String> {
        self.traced("name", read_name)
    }
}
