use super::{ByteStr, Version};

use std::fmt;

/// A snapshot of the server environment for a single request.
///
/// Entries keep their insertion order, and a value may be explicitly
/// null. Inserting a key that already exists replaces its value in place.
///
/// ```
/// use bison_env::Env;
///
/// let mut env = Env::new();
/// env.insert("REQUEST_URI", "/foo");
/// env.insert_null("HTTPS");
///
/// assert_eq!(env.get("REQUEST_URI").map(|v| v.as_str()), Some("/foo"));
/// assert!(env.contains("HTTPS"));
/// assert_eq!(env.get("HTTPS"), None);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Env {
    entries: Vec<(ByteStr, Option<ByteStr>)>,
}

impl Env {
    pub const REQUEST_METHOD: &'static str = "REQUEST_METHOD";
    pub const REQUEST_TIME: &'static str = "REQUEST_TIME";
    pub const REQUEST_URI: &'static str = "REQUEST_URI";
    pub const SERVER_NAME: &'static str = "SERVER_NAME";
    pub const SERVER_PORT: &'static str = "SERVER_PORT";
    pub const SERVER_PROTOCOL: &'static str = "SERVER_PROTOCOL";
    pub const QUERY_STRING: &'static str = "QUERY_STRING";
    pub const REMOTE_ADDR: &'static str = "REMOTE_ADDR";
    pub const HTTPS: &'static str = "HTTPS";
    pub const CONTENT_TYPE: &'static str = "CONTENT_TYPE";
    pub const CONTENT_LENGTH: &'static str = "CONTENT_LENGTH";
    pub const HTTP_USER_AGENT: &'static str = "HTTP_USER_AGENT";
    pub const HTTP_ACCEPT_LANGUAGE: &'static str = "HTTP_ACCEPT_LANGUAGE";
    pub const HTTP_ACCEPT_ENCODING: &'static str = "HTTP_ACCEPT_ENCODING";
    pub const HTTP_COOKIE: &'static str = "HTTP_COOKIE";

    pub fn new() -> Env {
        Env::default()
    }

    /// Snapshot the environment of the current process.
    ///
    /// This is how a CGI program receives its request. Variables that
    /// are not valid unicode are converted lossily.
    pub fn capture() -> Env {
        std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    /// Build the environment a CGI server would pass for the given
    /// request head.
    ///
    /// Every header becomes an `HTTP_*` entry, except `Content-Type` and
    /// `Content-Length` which map to `CONTENT_TYPE` and `CONTENT_LENGTH`.
    /// Repeated headers are joined with `", "`, or `"; "` for `Cookie`.
    /// Header values that are not valid UTF-8 are skipped.
    pub fn from_parts(parts: &::http::request::Parts) -> Env {
        let mut env = Env::new();
        let uri = &parts.uri;

        env.insert(Env::REQUEST_METHOD, parts.method.as_str());
        env.insert(
            Env::REQUEST_URI,
            uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/"),
        );

        if let Some(query) = uri.query() {
            env.insert(Env::QUERY_STRING, query);
        }

        if let Some(version) = Version::from_http(parts.version) {
            env.insert(Env::SERVER_PROTOCOL, version.as_str());
        }

        let host = uri.authority().map(|authority| authority.as_str()).or_else(|| {
            parts
                .headers
                .get(::http::header::HOST)
                .and_then(|value| value.to_str().ok())
        });

        if let Some(host) = host {
            let (name, port) = split_host(host);
            env.insert(Env::SERVER_NAME, name);

            if let Some(port) = port {
                env.insert(Env::SERVER_PORT, port);
            }
        }

        if uri.scheme_str() == Some("https") {
            env.insert(Env::HTTPS, "on");
        }

        for name in parts.headers.keys() {
            let separator = if *name == ::http::header::COOKIE { "; " } else { ", " };

            let values = parts
                .headers
                .get_all(name)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .collect::<Vec<_>>();

            if values.is_empty() {
                continue;
            }

            env.insert(env_key(name.as_str()), values.join(separator));
        }

        env
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the key is present, even if its value is null.
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns the value of the given key, or `None` if the key is
    /// absent or null.
    pub fn get(&self, key: &str) -> Option<&ByteStr> {
        self.position(key)
            .and_then(|index| self.entries[index].1.as_ref())
    }

    pub fn insert(&mut self, key: impl Into<ByteStr>, value: impl Into<ByteStr>) {
        self.set(key.into(), Some(value.into()));
    }

    /// Insert a key with an explicit null value.
    pub fn insert_null(&mut self, key: impl Into<ByteStr>) {
        self.set(key.into(), None);
    }

    pub fn remove(&mut self, key: &str) -> Option<ByteStr> {
        self.position(key)
            .and_then(|index| self.entries.remove(index).1)
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    fn set(&mut self, key: ByteStr, value: Option<ByteStr>) {
        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<ByteStr>,
    V: Into<ByteStr>,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut env = Env::new();
        env.extend(iter);
        env
    }
}

impl<K, V> Extend<(K, V)> for Env
where
    K: Into<ByteStr>,
    V: Into<ByteStr>,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

fn env_key(header: &str) -> String {
    match header {
        "content-type" => Env::CONTENT_TYPE.to_owned(),
        "content-length" => Env::CONTENT_LENGTH.to_owned(),
        _ => {
            let mut key = String::with_capacity(header.len() + 5);
            key.push_str("HTTP_");
            key.extend(header.chars().map(|c| match c {
                '-' => '_',
                c => c.to_ascii_uppercase(),
            }));
            key
        }
    }
}

// Splits `host[:port]`, leaving bracketed IPv6 literals intact.
fn split_host(host: &str) -> (&str, Option<&str>) {
    match host.rfind(':') {
        Some(index) if !host[index..].contains(']') => (&host[..index], Some(&host[index + 1..])),
        _ => (host, None),
    }
}
