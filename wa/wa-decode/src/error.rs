//! Crate-level error types for wa-decode.

use thiserror::Error;

/// Result alias for decoding operations.
pub type Result<T> = core::result::Result<T, DecodeError>;

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Overflow,
    Truncated,
    InvalidUtf8,
    Nested,
}

/// Errors that can occur while decoding a byte stream.
///
/// `Clone`, `PartialEq` and `Drop` walk `Nested` layers in a loop, so context
/// chains of any depth are safe to copy, compare and drop.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// More continuation bytes than `ceil(max_bits / 7)`, or a decoded value
    /// that does not fit the requested integer type.
    #[error("LEB128 overflow (max bits={max_bits}) at offset {offset}")]
    Overflow { max_bits: u32, offset: usize },

    #[error("unexpected end of input at offset {offset}: needed {needed} byte(s), {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("invalid UTF-8 string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("{context}")]
    Nested {
        context: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Overflow { .. } => ErrorKind::Overflow,
            DecodeError::Truncated { .. } => ErrorKind::Truncated,
            DecodeError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            DecodeError::Nested { .. } => ErrorKind::Nested,
        }
    }

    /// Wrap this error with an additional layer of context.
    pub fn nest(self, context: impl Into<String>) -> Self {
        DecodeError::Nested {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping every `Nested` wrapper.
    pub fn root(&self) -> &DecodeError {
        let mut cur = self;
        while let DecodeError::Nested { source, .. } = cur {
            cur = source;
        }
        cur
    }

    /// Context messages of every `Nested` layer, outermost first.
    pub fn contexts(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::successors(Some(self), |e| match e {
            DecodeError::Nested { source, .. } => Some(&**source),
            _ => None,
        })
        .filter_map(|e| match e {
            DecodeError::Nested { context, .. } => Some(context.as_str()),
            _ => None,
        })
    }

    /// Number of errors in the chain, counting this one.
    pub fn depth(&self) -> usize {
        self.contexts().count() + 1
    }

    fn take_source(&mut self) -> Option<DecodeError> {
        match self {
            DecodeError::Nested { source, .. } => {
                Some(std::mem::replace(&mut **source, DecodeError::InvalidUtf8 { offset: 0 }))
            }
            _ => None,
        }
    }
}

impl Clone for DecodeError {
    fn clone(&self) -> Self {
        let mut contexts = Vec::new();
        let mut cur = self;
        let mut out = loop {
            match *cur {
                DecodeError::Overflow { max_bits, offset } => {
                    break DecodeError::Overflow { max_bits, offset }
                }
                DecodeError::Truncated { offset, needed, available } => {
                    break DecodeError::Truncated { offset, needed, available }
                }
                DecodeError::InvalidUtf8 { offset } => break DecodeError::InvalidUtf8 { offset },
                DecodeError::Nested { ref context, ref source } => {
                    contexts.push(context);
                    cur = source;
                }
            }
        };
        for context in contexts.into_iter().rev() {
            out = out.nest(context.clone());
        }
        out
    }
}

impl PartialEq for DecodeError {
    fn eq(&self, other: &Self) -> bool {
        use DecodeError::*;
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Nested { context: ca, source: sa }, Nested { context: cb, source: sb }) => {
                    if ca != cb {
                        return false;
                    }
                    a = sa;
                    b = sb;
                }
                (
                    Overflow { max_bits: ma, offset: oa },
                    Overflow { max_bits: mb, offset: ob },
                ) => return ma == mb && oa == ob,
                (
                    Truncated { offset: oa, needed: na, available: va },
                    Truncated { offset: ob, needed: nb, available: vb },
                ) => return oa == ob && na == nb && va == vb,
                (InvalidUtf8 { offset: oa }, InvalidUtf8 { offset: ob }) => return oa == ob,
                _ => return false,
            }
        }
    }
}

impl Eq for DecodeError {}

impl Drop for DecodeError {
    fn drop(&mut self) {
        let mut next = self.take_source();
        while let Some(mut e) = next {
            next = e.take_source();
        }
    }
}

/// Attach context to the error side of a decode result.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.nest(context))
    }

    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| e.nest(f()))
    }
}
