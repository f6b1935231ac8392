mod normalize;
mod params;

pub use normalize::Normalizer;
pub use params::Params;

use super::upload::{self, RawUploads, Upload, UploadRecord};
use super::{AcceptedEncodings, AcceptedLanguages, ByteStr, Env, Headers, Method, Protocol};
use crate::{Config, Error};

use once_cell::sync::OnceCell;
use std::time::SystemTime;

/// An HTTP request, as described by the server environment.
///
/// Requests are usually created by a [`Normalizer`], and may then be
/// adjusted with the setters before being handed to application code.
#[derive(Debug, Clone)]
pub struct Request {
    protocol: Protocol,
    host: Option<ByteStr>,
    port: Option<u16>,
    path: Option<ByteStr>,
    query: Option<ByteStr>,
    uri: Option<ByteStr>,
    headers: Headers,
    method: Option<Method>,
    time: SystemTime,
    languages: AcceptedLanguages,
    encodings: AcceptedEncodings,
    user_agent: Option<ByteStr>,
    remote_addr: Option<ByteStr>,
    form: Params,
    cookies: Params,
    uploads: RawUploads,
    // parsed from `query` on first use
    query_params: OnceCell<Params>,
}

impl Request {
    /// Create an empty request received now.
    pub fn new() -> Request {
        Request {
            protocol: Protocol::Unknown,
            host: None,
            port: None,
            path: None,
            query: None,
            uri: None,
            headers: Headers::new(),
            method: None,
            time: SystemTime::now(),
            languages: AcceptedLanguages::new(),
            encodings: AcceptedEncodings::new(),
            user_agent: None,
            remote_addr: None,
            form: Params::new(),
            cookies: Params::new(),
            uploads: RawUploads::new(),
            query_params: OnceCell::new(),
        }
    }

    /// Build a request from a server environment.
    ///
    /// See [`Normalizer::normalize`].
    pub fn from_env(env: &Env, config: &Config) -> Result<Request, Error> {
        normalize::normalize(env, config)
    }

    /// Whether the request was received over HTTP or HTTPS.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.protocol = protocol;
    }

    /// The name of the server that received the request.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn set_host(&mut self, host: Option<ByteStr>) {
        self.host = host;
    }

    /// The port the request was received on.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Everything between the host and the query string.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<ByteStr>) {
        self.path = path;
    }

    /// The query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn set_query(&mut self, query: Option<ByteStr>) {
        self.query = query;
        self.query_params = OnceCell::new();
    }

    /// Everything after the host, with the base path removed.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: Option<ByteStr>) {
        self.uri = uri;
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn set_headers(&mut self, headers: Headers) {
        self.headers = headers;
    }

    pub fn add_header(&mut self, name: impl Into<ByteStr>, value: impl Into<ByteStr>) {
        self.headers.insert((name, value));
    }

    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    pub fn set_method(&mut self, method: Option<Method>) {
        self.method = method;
    }

    /// When the server received the request.
    pub fn time(&self) -> SystemTime {
        self.time
    }

    pub fn set_time(&mut self, time: SystemTime) {
        self.time = time;
    }

    pub fn languages(&self) -> &AcceptedLanguages {
        &self.languages
    }

    pub fn set_languages(&mut self, languages: AcceptedLanguages) {
        self.languages = languages;
    }

    pub fn encodings(&self) -> &AcceptedEncodings {
        &self.encodings
    }

    pub fn set_encodings(&mut self, encodings: AcceptedEncodings) {
        self.encodings = encodings;
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn set_user_agent(&mut self, user_agent: Option<ByteStr>) {
        self.user_agent = user_agent;
    }

    /// The address of the client.
    pub fn remote_addr(&self) -> Option<&str> {
        self.remote_addr.as_deref()
    }

    pub fn set_remote_addr(&mut self, remote_addr: Option<ByteStr>) {
        self.remote_addr = remote_addr;
    }

    /// Build a URL for this request with the given scheme:
    /// `{scheme}://{host}{uri}`.
    pub fn url(&self, scheme: &str) -> String {
        format!(
            "{}://{}{}",
            scheme,
            self.host().unwrap_or_default(),
            self.uri().unwrap_or_default()
        )
    }

    /// Returns a form or query variable.
    ///
    /// Form variables take precedence over query parameters of the
    /// same name.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.form
            .get(name)
            .or_else(|| self.query_params().get(name))
    }

    /// The parameters of the query string.
    ///
    /// A query string that cannot be parsed has no parameters.
    pub fn query_params(&self) -> &Params {
        self.query_params.get_or_init(|| {
            let query = self.query().unwrap_or_default();

            Params::from_urlencoded(query).unwrap_or_else(|err| {
                tracing::debug!(%err, query, "ignoring malformed query string");
                Params::new()
            })
        })
    }

    /// The variables of a submitted form.
    pub fn form(&self) -> &Params {
        &self.form
    }

    pub fn set_form(&mut self, form: Params) {
        self.form = form;
    }

    /// Parse an `application/x-www-form-urlencoded` request body into
    /// the form variables.
    pub fn parse_form(&mut self, body: &str) -> Result<(), Error> {
        self.form = Params::from_urlencoded(body)?;
        Ok(())
    }

    /// Returns the value of the cookie with the given name.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name)
    }

    pub fn cookies(&self) -> &Params {
        &self.cookies
    }

    pub fn set_cookies(&mut self, cookies: Params) {
        self.cookies = cookies;
    }

    /// Returns the files uploaded through the given form field.
    ///
    /// A single file input yields [`Upload::Single`], an array input
    /// (`field[]`) yields [`Upload::Multiple`]. Returns `None` if
    /// nothing was submitted under that name.
    pub fn file(&self, name: &str) -> Option<Upload> {
        self.uploads.get(name).map(upload::normalize)
    }

    /// Returns the files uploaded through the given form field, regardless
    /// of the shape of the field.
    pub fn files(&self, name: &str) -> Vec<UploadRecord> {
        self.file(name).map(Upload::into_vec).unwrap_or_default()
    }

    pub fn uploads(&self) -> &RawUploads {
        &self.uploads
    }

    pub fn set_uploads(&mut self, uploads: RawUploads) {
        self.uploads = uploads;
    }
}

impl Default for Request {
    fn default() -> Self {
        Request::new()
    }
}

impl PartialEq for Request {
    fn eq(&self, other: &Self) -> bool {
        self.protocol == other.protocol
            && self.host == other.host
            && self.port == other.port
            && self.path == other.path
            && self.query == other.query
            && self.uri == other.uri
            && self.headers == other.headers
            && self.method == other.method
            && self.time == other.time
            && self.languages == other.languages
            && self.encodings == other.encodings
            && self.user_agent == other.user_agent
            && self.remote_addr == other.remote_addr
            && self.form == other.form
            && self.cookies == other.cookies
            && self.uploads == other.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::upload::{Field, RawUpload};

    #[test]
    fn vars() {
        let mut req = Request::new();
        req.set_query(Some("a=1&b=2".into()));
        req.parse_form("b=3").unwrap();

        assert_eq!(req.var("a"), Some("1"));
        assert_eq!(req.var("b"), Some("3"));
        assert_eq!(req.var("c"), None);

        // the cached query parameters are dropped
        req.set_query(Some("c=4".into()));
        assert_eq!(req.var("a"), None);
        assert_eq!(req.var("c"), Some("4"));
    }

    #[test]
    fn add_header_replaces_any_case() {
        let mut req = Request::new();
        req.add_header("Content-Type", "text/plain");
        req.add_header("content-type", "application/json");

        assert_eq!(req.headers().len(), 1);
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn url() {
        let mut req = Request::new();
        assert_eq!(req.url("http"), "http://");

        req.set_host(Some("example.com".into()));
        req.set_uri(Some("/foo?bar".into()));
        assert_eq!(req.url("https"), "https://example.com/foo?bar");
    }

    #[test]
    fn files() {
        let mut req = Request::new();
        let mut uploads = RawUploads::new();
        uploads.insert(
            "avatar".to_owned(),
            RawUpload {
                name: Some(Field::One("me.png".to_owned())),
                ..RawUpload::default()
            },
        );
        req.set_uploads(uploads);

        assert!(matches!(req.file("avatar"), Some(Upload::Single(_))));
        assert_eq!(req.files("avatar").len(), 1);
        assert_eq!(req.file("photos"), None);
        assert!(req.files("photos").is_empty());
    }
}
