//! wa-decode: byte-stream primitives beneath a binary module reader.
//!
//! - [`binary`]: bounds-checked cursor, LEB128 decoding, length-prefixed strings
//! - [`bits`]: in-place sign extension and word rotation
//! - [`float`]: NaN-propagating, signed-zero-aware min/max
//! - [`chain`]: [`ResultChain`] status values with causal chains
//! - [`log`]: leveled diagnostic sinks passed to the code that logs

pub mod binary;
pub mod bits;
pub mod chain;
pub mod error;
pub mod float;
pub mod log;

pub use binary::leb128::{decode_signed_at, decode_unsigned_at};
pub use binary::reader::read_string_at;
pub use binary::{Cursor, DecodedInteger, DecodedString, IntWidth, Reader};
pub use chain::ResultChain;
pub use error::{DecodeError, ErrorKind, Result, ResultExt};
pub use log::{Level, LogSink, NullSink, StdLogger, TracingSink};
