use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A UTF-8 encoded string stored as [`Bytes`](bytes::Bytes).
///
/// Cloning a `ByteStr` is cheap, which lets a [`Request`](super::Request)
/// share strings with the [`Env`](super::Env) it was built from.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteStr(bytes::Bytes);

impl ByteStr {
    pub fn new(str: impl Into<ByteStr>) -> ByteStr {
        str.into()
    }

    pub fn from_static(str: &'static str) -> ByteStr {
        ByteStr(bytes::Bytes::from_static(str.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        self
    }

    /// Returns a `ByteStr` for the given subslice of `self`,
    /// sharing the underlying buffer.
    ///
    /// `subset` must be a slice obtained from `self.as_str()`.
    pub(crate) fn slice_ref(&self, subset: &str) -> ByteStr {
        ByteStr(self.0.slice_ref(subset.as_bytes()))
    }
}

impl std::ops::Deref for ByteStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // SAFETY: only ever constructed from `str` or `String`
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

// Hashes like `str` so that maps keyed by `ByteStr` can be queried with `&str`.
impl Hash for ByteStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for ByteStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for ByteStr {
    fn as_ref(&self) -> &str {
        self
    }
}

impl Borrow<str> for ByteStr {
    fn borrow(&self) -> &str {
        self
    }
}

impl PartialEq<str> for ByteStr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ByteStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<ByteStr> for str {
    fn eq(&self, other: &ByteStr) -> bool {
        self == other.as_str()
    }
}

impl From<String> for ByteStr {
    fn from(string: String) -> Self {
        ByteStr(string.into())
    }
}

impl From<&str> for ByteStr {
    fn from(str: &str) -> Self {
        ByteStr(str.to_owned().into())
    }
}

impl From<ByteStr> for bytes::Bytes {
    fn from(str: ByteStr) -> Self {
        str.0
    }
}
