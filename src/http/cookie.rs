use crate::Error;

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// the latest instant `httpdate` can format: 9999-12-31 23:59:59
const MAX_HTTP_DATE: u64 = 253_402_300_799;

/// A cookie to be sent to the client with a [`Response`](super::Response).
///
/// The `Display` implementation renders the value of the `Set-Cookie`
/// header for this cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    /// The cookie value; `None` deletes the cookie on the client.
    pub value: Option<String>,
    /// When the cookie expires; `None` makes it a session cookie.
    pub expires: Option<SystemTime>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Cookie {
        Cookie {
            name: name.into(),
            value: Some(value.into()),
            expires: None,
            path: None,
            domain: None,
            secure: false,
            http_only: false,
        }
    }

    /// A cookie that tells the client to delete `name`.
    ///
    /// It carries no value and expired an hour ago.
    pub fn removal(name: impl Into<String>) -> Cookie {
        Cookie {
            value: None,
            expires: SystemTime::now().checked_sub(Duration::from_secs(3600)),
            ..Cookie::new(name, "")
        }
    }

    pub fn with_expires(mut self, expires: SystemTime) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Check that the cookie can be sent in a `Set-Cookie` header.
    ///
    /// The name must be non-empty and free of control characters,
    /// whitespace, `=`, `,` and `;`. The path and domain may not contain
    /// control characters, whitespace, `,` or `;`. The value is always
    /// percent-encoded and needs no check.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return Err(Error::invalid_cookie(&self.name, "the name is empty"));
        }

        if self.name.contains(|c: char| reserved(c) || c == '=') {
            return Err(Error::invalid_cookie(
                &self.name,
                "the name contains a reserved character",
            ));
        }

        let attributes = [&self.path, &self.domain];
        if attributes.into_iter().flatten().any(|attr| attr.contains(reserved)) {
            return Err(Error::invalid_cookie(
                &self.name,
                "the path or domain contains a reserved character",
            ));
        }

        Ok(())
    }
}

fn reserved(c: char) -> bool {
    c.is_ascii_control() || c.is_whitespace() || c == ',' || c == ';'
}

fn http_date(time: SystemTime) -> String {
    let max = UNIX_EPOCH + Duration::from_secs(MAX_HTTP_DATE);
    httpdate::fmt_http_date(time.clamp(UNIX_EPOCH, max))
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => {
                write!(f, "{}={}", self.name, urlencoding::encode(value))?;

                if let Some(expires) = self.expires {
                    write!(f, "; Expires={}", http_date(expires))?;
                }
            }
            // an empty value deletes the cookie
            _ => {
                write!(
                    f,
                    "{}=deleted; Expires={}; Max-Age=0",
                    self.name,
                    http_date(UNIX_EPOCH + Duration::from_secs(1))
                )?;
            }
        }

        if let Some(domain) = &self.domain {
            write!(f, "; Domain={}", domain)?;
        }

        if let Some(path) = &self.path {
            write!(f, "; Path={}", path)?;
        }

        if self.secure {
            write!(f, "; Secure")?;
        }

        if self.http_only {
            write!(f, "; HttpOnly")?;
        }

        Ok(())
    }
}

/// Parse the `name=value` pairs of a `Cookie` request header.
///
/// Values are form-decoded: `+` becomes a space and percent escapes are
/// resolved. Pairs without a `=` or with an empty name are skipped.
pub(crate) fn parse_header(header: &str) -> impl Iterator<Item = (String, String)> + '_ {
    header.split(';').filter_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        let name = name.trim();

        if name.is_empty() {
            return None;
        }

        let value = value.trim().replace('+', " ");
        let value = match urlencoding::decode(&value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value,
        };

        Some((name.to_owned(), value))
    })
}
