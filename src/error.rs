use thiserror::Error;

/// Errors produced while building requests and responses.
#[derive(Debug, Error)]
pub enum Error {
    /// A header carried a value that cannot be interpreted, such as
    /// a non-numeric `q=` weight in `Accept-Language`.
    #[error("malformed value for header '{name}': {value:?}")]
    MalformedHeaderValue { name: &'static str, value: String },

    /// A cookie that cannot be written as a `Set-Cookie` header.
    #[error("invalid cookie {name:?}: {reason}")]
    InvalidCookie { name: String, reason: &'static str },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to deserialize form variables: {0}")]
    Form(#[from] serde_urlencoded::de::Error),

    #[cfg(feature = "json")]
    #[error("failed to deserialize upload metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to build HTTP response: {0}")]
    Http(#[from] ::http::Error),
}

impl Error {
    pub(crate) fn malformed(name: &'static str, value: impl Into<String>) -> Self {
        Error::MalformedHeaderValue {
            name,
            value: value.into(),
        }
    }

    pub(crate) fn invalid_cookie(name: &str, reason: &'static str) -> Self {
        Error::InvalidCookie {
            name: name.to_owned(),
            reason,
        }
    }
}
