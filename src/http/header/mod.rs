//! HTTP headers.

mod canonical;
mod common;
mod map;

pub use canonical::{canonical_name, canonicalize};
pub use common::ContentType;
pub use map::{Headers, Iter};

use super::ByteStr;

/// Types that represent an HTTP header.
pub trait IntoHeader {
    /// Returns the name and value of the header.
    fn into_header(self) -> (ByteStr, ByteStr);
}

impl<N, V> IntoHeader for (N, V)
where
    N: Into<ByteStr>,
    V: Into<ByteStr>,
{
    fn into_header(self) -> (ByteStr, ByteStr) {
        (self.0.into(), self.1.into())
    }
}
