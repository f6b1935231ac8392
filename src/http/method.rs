use super::ByteStr;

use std::fmt;

/// An HTTP method.
///
/// Methods outside of the standard set are kept verbatim as
/// [`Method::Extension`], as is any method that is not spelled in
/// uppercase.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Trace,
    Connect,
    Patch,
    Extension(ByteStr),
}

impl Method {
    /// The string representation of this HTTP method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
            Method::Patch => "PATCH",
            Method::Extension(method) => method,
        }
    }
}

impl From<ByteStr> for Method {
    fn from(method: ByteStr) -> Self {
        match method.as_str() {
            "GET" => Method::Get,
            "PUT" => Method::Put,
            "POST" => Method::Post,
            "DELETE" => Method::Delete,
            "OPTIONS" => Method::Options,
            "HEAD" => Method::Head,
            "TRACE" => Method::Trace,
            "CONNECT" => Method::Connect,
            "PATCH" => Method::Patch,
            _ => Method::Extension(method),
        }
    }
}

impl From<&str> for Method {
    fn from(method: &str) -> Self {
        Method::from(ByteStr::from(method))
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Get
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
