use super::ByteStr;
use crate::Error;

use std::collections::{hash_map, HashMap};

const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// The languages accepted by the client, mapped to their weight.
///
/// Weights are in `[0, 1]`; a language listed without a `q=` weight
/// has a weight of `1.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptedLanguages {
    weights: HashMap<ByteStr, f32>,
}

impl AcceptedLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `Accept-Language` value such as `en-US;q=0.8,fr;q=0.9,de`.
    ///
    /// Empty segments are skipped, and a language that is listed twice
    /// keeps its last weight. A weight that is not a number between 0
    /// and 1 is rejected with [`Error::MalformedHeaderValue`].
    pub fn parse(value: &ByteStr) -> Result<Self, Error> {
        let mut languages = Self::new();

        for segment in value.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let mut parts = segment.split(';');
            let tag = parts.next().unwrap_or_default().trim();

            let weight = match parts.next() {
                Some(weight) => {
                    let weight = weight.trim();
                    parse_weight(weight.strip_prefix("q=").unwrap_or(weight))
                        .ok_or_else(|| Error::malformed(ACCEPT_LANGUAGE, segment))?
                }
                None => 1.0,
            };

            languages.insert(value.slice_ref(tag), weight);
        }

        Ok(languages)
    }

    pub fn get(&self, tag: &str) -> Option<f32> {
        self.weights.get(tag).copied()
    }

    pub fn insert(&mut self, tag: impl Into<ByteStr>, weight: f32) -> Option<f32> {
        self.weights.insert(tag.into(), weight)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The language with the highest weight.
    ///
    /// Ties are broken by the language tag so the result does not
    /// depend on iteration order.
    pub fn preferred(&self) -> Option<&str> {
        self.iter()
            .filter(|(_, weight)| *weight > 0.0)
            .max_by(|(a, x), (b, y)| x.total_cmp(y).then_with(|| b.cmp(a)))
            .map(|(tag, _)| tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.weights.iter().map(|(tag, weight)| (tag.as_str(), *weight))
    }
}

impl<T> FromIterator<(T, f32)> for AcceptedLanguages
where
    T: Into<ByteStr>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, f32)>,
    {
        AcceptedLanguages {
            weights: iter
                .into_iter()
                .map(|(tag, weight)| (tag.into(), weight))
                .collect(),
        }
    }
}

impl IntoIterator for AcceptedLanguages {
    type Item = (ByteStr, f32);
    type IntoIter = hash_map::IntoIter<ByteStr, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.into_iter()
    }
}

fn parse_weight(weight: &str) -> Option<f32> {
    weight
        .parse::<f32>()
        .ok()
        .filter(|weight| (0.0..=1.0).contains(weight))
}

/// The content encodings accepted by the client, in the order they
/// were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptedEncodings(Vec<ByteStr>);

impl AcceptedEncodings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `Accept-Encoding` value such as `gzip, deflate,br`.
    ///
    /// Tokens are trimmed and empty tokens are dropped. Duplicates are
    /// kept.
    pub fn parse(value: &ByteStr) -> Self {
        value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| value.slice_ref(token))
            .collect()
    }

    pub fn contains(&self, encoding: &str) -> bool {
        self.0.iter().any(|e| e == encoding)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, encoding: impl Into<ByteStr>) {
        self.0.push(encoding.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(ByteStr::as_str)
    }
}

impl<T> FromIterator<T> for AcceptedEncodings
where
    T: Into<ByteStr>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        AcceptedEncodings(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages(value: &str) -> Result<AcceptedLanguages, Error> {
        AcceptedLanguages::parse(&ByteStr::from(value))
    }

    #[test]
    fn language_weights() {
        let langs = languages("en-US;q=0.8,fr;q=0.9,de").unwrap();

        assert_eq!(langs.len(), 3);
        assert_eq!(langs.get("en-US"), Some(0.8));
        assert_eq!(langs.get("fr"), Some(0.9));
        assert_eq!(langs.get("de"), Some(1.0));
        assert_eq!(langs.preferred(), Some("de"));
    }

    #[test]
    fn language_edge_cases() {
        assert!(languages("").unwrap().is_empty());
        assert!(languages(",,").unwrap().is_empty());

        // later duplicates win
        let langs = languages("en;q=0.1,en;q=0.7").unwrap();
        assert_eq!(langs.get("en"), Some(0.7));

        // the `q=` marker is optional, and whitespace is tolerated
        let langs = languages("fr;0.5, de; q=0.3").unwrap();
        assert_eq!(langs.get("fr"), Some(0.5));
        assert_eq!(langs.get("de"), Some(0.3));

        // only the first weight counts
        let langs = languages("it;q=0.2;level=1").unwrap();
        assert_eq!(langs.get("it"), Some(0.2));
    }

    #[test]
    fn malformed_weight() {
        for value in ["en;q=high", "en;q=", "en;q=1.5", "en;q=NaN"] {
            match languages(value) {
                Err(Error::MalformedHeaderValue { name, .. }) => {
                    assert_eq!(name, "Accept-Language")
                }
                other => panic!("expected malformed header for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn encodings() {
        let encodings = AcceptedEncodings::parse(&ByteStr::from("gzip, deflate,br"));
        assert!(encodings.iter().eq(["gzip", "deflate", "br"]));

        let encodings = AcceptedEncodings::parse(&ByteStr::from(" ,gzip,, gzip , "));
        assert!(encodings.iter().eq(["gzip", "gzip"]));
        assert!(encodings.contains("gzip"));
        assert!(!encodings.contains("br"));
    }
}
