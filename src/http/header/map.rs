use super::IntoHeader;
use crate::http::ByteStr;

use std::collections::hash_map::{self, HashMap};
use std::fmt;

/// A map of canonical header names to their values.
///
/// Lookups try the exact name first and then fall back to an ASCII
/// case-insensitive match, so `get("content-type")` finds a header
/// stored as `Content-Type`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    map: HashMap<ByteStr, ByteStr>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers {
            map: HashMap::with_capacity(16),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.find(name).map(|(_, value)| value.as_str())
    }

    /// Insert a header, returning the previous value.
    ///
    /// Names are compared ignoring ASCII case. A header that is already
    /// present keeps its name and has its value replaced.
    pub fn insert<H>(&mut self, header: H) -> Option<ByteStr>
    where
        H: IntoHeader,
    {
        let (name, value) = header.into_header();
        let key = self.find(&name).map(|(key, _)| key.clone()).unwrap_or(name);
        self.map.insert(key, value)
    }

    pub fn remove(&mut self, name: &str) -> Option<ByteStr> {
        let key = self.find(name).map(|(key, _)| key.clone())?;
        self.map.remove(&key)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            map: self.map.iter(),
        }
    }

    fn find(&self, name: &str) -> Option<(&ByteStr, &ByteStr)> {
        self.map.get_key_value(name).or_else(|| {
            self.map
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
        })
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<H> FromIterator<H> for Headers
where
    H: IntoHeader,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = H>,
    {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl<H> Extend<H> for Headers
where
    H: IntoHeader,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = H>,
    {
        for header in iter {
            self.insert(header);
        }
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the name and value of each header.
pub struct Iter<'a> {
    map: hash_map::Iter<'a, ByteStr, ByteStr>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.map
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map.size_hint()
    }
}
