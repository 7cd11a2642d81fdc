//! Status values that carry a causal chain of failures.

use std::fmt;

use crate::error::DecodeError;

/// Outcome of an operation: success, a failure, or a failure wrapping an
/// earlier one.
///
/// Each `Nested` node exclusively owns its cause, so a chain of depth N is a
/// singly linked list of N boxed nodes. Copying, comparing, formatting and
/// dropping walk the list in a loop, so depth is bounded only by memory.
#[derive(Default)]
pub enum ResultChain {
    #[default]
    Ok,
    Err(String),
    Nested {
        message: String,
        cause: Box<ResultChain>,
    },
}

impl ResultChain {
    pub fn ok() -> Self {
        ResultChain::Ok
    }

    pub fn err(message: impl Into<String>) -> Self {
        ResultChain::Err(message.into())
    }

    /// New failure whose cause is a deep copy of `parent`; `parent` stays usable.
    pub fn nest(parent: &ResultChain, message: impl Into<String>) -> Self {
        ResultChain::Nested {
            message: message.into(),
            cause: Box::new(parent.clone()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ResultChain::Ok)
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Top-level message; `None` for `Ok`.
    pub fn message(&self) -> Option<&str> {
        match self {
            ResultChain::Ok => None,
            ResultChain::Err(message) | ResultChain::Nested { message, .. } => Some(message.as_str()),
        }
    }

    pub fn cause(&self) -> Option<&ResultChain> {
        match self {
            ResultChain::Nested { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }

    /// Nodes from this one down to the original failure.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }

    /// Number of nodes in the chain (1 for `Ok` and plain `Err`).
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// Innermost node.
    pub fn root_cause(&self) -> &ResultChain {
        self.iter().last().unwrap_or(self)
    }
}

impl Drop for ResultChain {
    // Unlink iteratively so long chains don't recurse once per node.
    fn drop(&mut self) {
        let mut next = self.take_cause();
        while let Some(mut node) = next {
            next = node.take_cause();
        }
    }
}

impl ResultChain {
    fn take_cause(&mut self) -> Option<ResultChain> {
        match self {
            ResultChain::Nested { cause, .. } => Some(std::mem::take(&mut **cause)),
            _ => None,
        }
    }
}

impl Clone for ResultChain {
    fn clone(&self) -> Self {
        let mut messages = Vec::new();
        let mut cur = self;
        let mut out = loop {
            match cur {
                ResultChain::Ok => break ResultChain::Ok,
                ResultChain::Err(message) => break ResultChain::Err(message.clone()),
                ResultChain::Nested { message, cause } => {
                    messages.push(message);
                    cur = cause;
                }
            }
        };
        for message in messages.into_iter().rev() {
            out = ResultChain::Nested {
                message: message.clone(),
                cause: Box::new(out),
            };
        }
        out
    }
}

impl PartialEq for ResultChain {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (
                    ResultChain::Nested { message: ma, cause: ca },
                    ResultChain::Nested { message: mb, cause: cb },
                ) => {
                    if ma != mb {
                        return false;
                    }
                    a = ca;
                    b = cb;
                }
                (ResultChain::Ok, ResultChain::Ok) => return true,
                (ResultChain::Err(ma), ResultChain::Err(mb)) => return ma == mb,
                _ => return false,
            }
        }
    }
}

impl Eq for ResultChain {}

impl fmt::Debug for ResultChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultChain::Ok => f.write_str("Ok"),
            ResultChain::Err(message) => f.debug_tuple("Err").field(message).finish(),
            ResultChain::Nested { .. } => {
                // Flattened: nested messages outermost first, then the root node.
                let messages: Vec<&str> = self
                    .iter()
                    .filter(|n| n.cause().is_some())
                    .filter_map(ResultChain::message)
                    .collect();
                f.debug_tuple("Nested")
                    .field(&messages)
                    .field(self.root_cause())
                    .finish()
            }
        }
    }
}

/// Iterator over a chain, outermost first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a ResultChain>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ResultChain;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next?;
        self.next = cur.cause();
        Some(cur)
    }
}

impl<'a> IntoIterator for &'a ResultChain {
    type Item = &'a ResultChain;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Display for ResultChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("ok");
        }
        let mut first = true;
        for node in self.iter().filter_map(ResultChain::message) {
            if !first {
                f.write_str(": ")?;
            }
            f.write_str(node)?;
            first = false;
        }
        Ok(())
    }
}

impl From<&DecodeError> for ResultChain {
    fn from(e: &DecodeError) -> Self {
        let contexts: Vec<&str> = e.contexts().collect();
        let mut chain = ResultChain::Err(e.root().to_string());
        for context in contexts.into_iter().rev() {
            chain = ResultChain::Nested {
                message: context.to_string(),
                cause: Box::new(chain),
            };
        }
        chain
    }
}

impl From<DecodeError> for ResultChain {
    fn from(e: DecodeError) -> Self {
        ResultChain::from(&e)
    }
}

impl<T> From<Result<T, DecodeError>> for ResultChain {
    fn from(r: Result<T, DecodeError>) -> Self {
        match r {
            Ok(_) => ResultChain::Ok,
            Err(e) => ResultChain::from(&e),
        }
    }
}
