//! Binary stream utilities: cursor, LEB128, and length-prefixed readers.
//! Every read is bounds-checked and reports failures as `DecodeError`.

pub mod cursor;
pub mod leb128;
pub mod reader;

pub use cursor::Cursor;
pub use leb128::{DecodedInteger, IntWidth};
pub use reader::{DecodedString, Reader};

pub use crate::error::{DecodeError, Result};
