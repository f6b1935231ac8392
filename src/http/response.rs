use super::header::{ContentType, IntoHeader};
use super::{status, Body, ByteStr, Cookie, Version};
use crate::Error;

use std::{fmt, io, slice};

/// An HTTP response, ready to be written out by a transport.
///
/// ```
/// use bison_env::Response;
///
/// let mut res = Response::new(404);
/// res.add_header("X-Request-Id", "42");
/// res.set_body("not found");
///
/// assert_eq!(res.status_line(), "HTTP/1.1 404 Not Found");
/// ```
#[derive(Debug)]
pub struct Response {
    status: u16,
    version: Version,
    headers: ResponseHeaders,
    cookies: Vec<Cookie>,
    body: Body,
}

impl Response {
    /// Create a response with the given status code, an empty body and
    /// an HTML `Content-Type`.
    pub fn new(status: u16) -> Response {
        let mut headers = ResponseHeaders::new();
        headers.insert(ContentType::Html);

        Response {
            status,
            version: Version::Http1_1,
            headers,
            cookies: Vec::new(),
            body: Body::empty(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    pub fn headers(&self) -> &ResponseHeaders {
        &self.headers
    }

    pub fn set_headers(&mut self, headers: ResponseHeaders) {
        self.headers = headers;
    }

    /// Set a header, replacing any previous value of the same name.
    pub fn add_header(&mut self, name: impl Into<ByteStr>, value: impl Into<ByteStr>) {
        self.headers.insert((name, value));
    }

    /// Mark a header as removed.
    ///
    /// The header is kept in the map with no value so that a transport
    /// can also drop a header it would otherwise add by default.
    pub fn remove_header(&mut self, name: impl Into<ByteStr>) {
        self.headers.remove(name);
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    /// Replace every cookie.
    ///
    /// A later cookie overwrites an earlier one with the same name.
    pub fn set_cookies(&mut self, cookies: impl IntoIterator<Item = Cookie>) {
        self.cookies.clear();
        cookies.into_iter().for_each(|cookie| self.add_cookie(cookie));
    }

    /// Set a cookie, replacing any previous cookie of the same name.
    pub fn add_cookie(&mut self, cookie: Cookie) {
        match self.cookies.iter_mut().find(|c| c.name == cookie.name) {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    /// Ask the client to delete a cookie by sending an expired one.
    pub fn remove_cookie(&mut self, name: impl Into<String>) {
        self.add_cookie(Cookie::removal(name));
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<Body>) {
        self.body = body.into();
    }

    pub fn into_body(self) -> Body {
        self.body
    }

    /// `HTTP/1.1 200 OK`
    pub fn status_line(&self) -> String {
        status::status_line(self.version, self.status)
    }

    /// Check that the status, headers and cookies can be sent as is.
    ///
    /// Header names and values must be valid for [`http`](::http), which
    /// rules out line breaks, and cookies must pass
    /// [`Cookie::validate`].
    pub fn validate(&self) -> Result<(), Error> {
        ::http::StatusCode::from_u16(self.status).map_err(::http::Error::from)?;

        for (name, value) in self.headers.present() {
            ::http::header::HeaderName::from_bytes(name.as_bytes())
                .map_err(::http::Error::from)?;
            ::http::header::HeaderValue::from_str(value).map_err(::http::Error::from)?;
        }

        self.cookies.iter().try_for_each(Cookie::validate)
    }

    /// Write the status line, headers and cookies, followed by the empty
    /// line that separates them from the body.
    ///
    /// Nothing is written if the response fails [`validate`](Response::validate),
    /// and the error is returned with [`io::ErrorKind::InvalidInput`].
    pub fn write_head<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        self.validate()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

        write!(out, "{}\r\n", self.status_line())?;

        for (name, value) in self.headers.present() {
            write!(out, "{}: {}\r\n", name, value)?;
        }

        for cookie in &self.cookies {
            write!(out, "Set-Cookie: {}\r\n", cookie)?;
        }

        out.write_all(b"\r\n")
    }

    /// Convert into an [`http::Response`](::http::Response).
    ///
    /// Removed headers are left out, and every cookie becomes a
    /// `Set-Cookie` header.
    pub fn into_http(self) -> Result<::http::Response<Body>, Error> {
        self.validate()?;

        let mut builder = ::http::Response::builder()
            .status(self.status)
            .version(self.version.into_http());

        for (name, value) in self.headers.present() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        for cookie in &self.cookies {
            builder = builder.header(::http::header::SET_COOKIE, cookie.to_string());
        }

        Ok(builder.body(self.body)?)
    }
}

impl Default for Response {
    fn default() -> Self {
        Response::new(200)
    }
}

/// The headers of a [`Response`].
///
/// Headers keep the order they were first set in. A header with no
/// value has been removed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: Vec<(ByteStr, Option<ByteStr>)>,
}

impl ResponseHeaders {
    pub fn new() -> ResponseHeaders {
        ResponseHeaders::default()
    }

    /// Returns the value of a header, or `None` if it was never set or
    /// has been removed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|i| self.entries[i].1.as_deref())
    }

    /// Whether the header has been explicitly removed.
    pub fn is_removed(&self, name: &str) -> bool {
        matches!(self.position(name), Some(i) if self.entries[i].1.is_none())
    }

    pub fn insert<H>(&mut self, header: H)
    where
        H: IntoHeader,
    {
        let (name, value) = header.into_header();
        self.set(name, Some(value));
    }

    pub fn remove(&mut self, name: impl Into<ByteStr>) {
        self.set(name.into(), None);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every header, including removed ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    fn present(&self) -> impl Iterator<Item = (&ByteStr, &ByteStr)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|value| (name, value)))
    }

    fn set(&mut self, name: ByteStr, value: Option<ByteStr>) {
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for ResponseHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<H> FromIterator<H> for ResponseHeaders
where
    H: IntoHeader,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = H>,
    {
        let mut headers = ResponseHeaders::new();
        iter.into_iter().for_each(|h| headers.insert(h));
        headers
    }
}

impl<'a> IntoIterator for &'a ResponseHeaders {
    type Item = &'a (ByteStr, Option<ByteStr>);
    type IntoIter = slice::Iter<'a, (ByteStr, Option<ByteStr>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
