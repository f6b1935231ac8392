//! HTTP status codes and their reason phrases.

use super::Version;

use std::fmt;

/// Status of an HTTP response.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Status {
    /// 100 Continue
    Continue,

    /// 101 Switching Protocols
    SwitchingProtocols,

    /// 102 Processing
    Processing,

    /// 103 Early Hints
    EarlyHints,

    /// 118 Connection timed out
    ConnectionTimedOut,

    /// 200 OK
    Ok,

    /// 201 Created
    Created,

    /// 202 Accepted
    Accepted,

    /// 203 Non-Authoritative Information
    NonAuthoritativeInformation,

    /// 204 No Content
    NoContent,

    /// 205 Reset Content
    ResetContent,

    /// 206 Partial Content
    PartialContent,

    /// 207 Multi-Status
    MultiStatus,

    /// 208 Already Reported
    AlreadyReported,

    /// 226 IM Used
    ImUsed,

    /// 300 Multiple Choices
    MultipleChoices,

    /// 301 Moved Permanently
    MovedPermanently,

    /// 302 Found
    Found,

    /// 303 See Other
    SeeOther,

    /// 304 Not Modified
    NotModified,

    /// 305 Use Proxy
    UseProxy,

    /// 306 Switch Proxy
    SwitchProxy,

    /// 307 Temporary Redirect
    TemporaryRedirect,

    /// 308 Permanent Redirect
    PermanentRedirect,

    /// 400 Bad Request
    BadRequest,

    /// 401 Unauthorized
    Unauthorized,

    /// 402 Payment Required
    PaymentRequired,

    /// 403 Forbidden
    Forbidden,

    /// 404 Not Found
    NotFound,

    /// 405 Method Not Allowed
    MethodNotAllowed,

    /// 406 Not Acceptable
    NotAcceptable,

    /// 407 Proxy Authentication Required
    ProxyAuthenticationRequired,

    /// 408 Request Timeout
    RequestTimeout,

    /// 409 Conflict
    Conflict,

    /// 410 Gone
    Gone,

    /// 411 Length Required
    LengthRequired,

    /// 412 Precondition Failed
    PreconditionFailed,

    /// 413 Payload Too Large
    PayloadTooLarge,

    /// 414 URI Too Long
    UriTooLong,

    /// 415 Unsupported Media Type
    UnsupportedMediaType,

    /// 416 Range Not Satisfiable
    RangeNotSatisfiable,

    /// 417 Expectation Failed
    ExpectationFailed,

    /// 418 I'm a teapot
    ImATeapot,

    /// 421 Misdirected Request
    MisdirectedRequest,

    /// 422 Unprocessable Entity
    UnprocessableEntity,

    /// 423 Locked
    Locked,

    /// 424 Failed Dependency
    FailedDependency,

    /// 425 Too Early
    TooEarly,

    /// 426 Upgrade Required
    UpgradeRequired,

    /// 428 Precondition Required
    PreconditionRequired,

    /// 429 Too Many Requests
    TooManyRequests,

    /// 431 Request Header Fields Too Large
    RequestHeaderFieldsTooLarge,

    /// 451 Unavailable For Legal Reasons
    UnavailableForLegalReasons,

    /// 500 Internal Server Error
    InternalServerError,

    /// 501 Not Implemented
    NotImplemented,

    /// 502 Bad Gateway
    BadGateway,

    /// 503 Service Unavailable
    ServiceUnavailable,

    /// 504 Gateway Timeout
    GatewayTimeout,

    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,

    /// 506 Variant Also Negotiates
    VariantAlsoNegotiates,

    /// 507 Insufficient Storage
    InsufficientStorage,

    /// 508 Loop Detected
    LoopDetected,

    /// 509 Bandwidth Limit Exceeded
    BandwidthLimitExceeded,

    /// 510 Not Extended
    NotExtended,

    /// 511 Network Authentication Required
    NetworkAuthenticationRequired,

    /// A status code without a registered reason phrase.
    Custom(u16),
}

impl Status {
    /// Look up the status for a numeric code.
    ///
    /// Codes without a registered reason phrase become [`Status::Custom`].
    pub fn from_code(code: u16) -> Status {
        match code {
            100 => Status::Continue,
            101 => Status::SwitchingProtocols,
            102 => Status::Processing,
            103 => Status::EarlyHints,
            118 => Status::ConnectionTimedOut,
            200 => Status::Ok,
            201 => Status::Created,
            202 => Status::Accepted,
            203 => Status::NonAuthoritativeInformation,
            204 => Status::NoContent,
            205 => Status::ResetContent,
            206 => Status::PartialContent,
            207 => Status::MultiStatus,
            208 => Status::AlreadyReported,
            226 => Status::ImUsed,
            300 => Status::MultipleChoices,
            301 => Status::MovedPermanently,
            302 => Status::Found,
            303 => Status::SeeOther,
            304 => Status::NotModified,
            305 => Status::UseProxy,
            306 => Status::SwitchProxy,
            307 => Status::TemporaryRedirect,
            308 => Status::PermanentRedirect,
            400 => Status::BadRequest,
            401 => Status::Unauthorized,
            402 => Status::PaymentRequired,
            403 => Status::Forbidden,
            404 => Status::NotFound,
            405 => Status::MethodNotAllowed,
            406 => Status::NotAcceptable,
            407 => Status::ProxyAuthenticationRequired,
            408 => Status::RequestTimeout,
            409 => Status::Conflict,
            410 => Status::Gone,
            411 => Status::LengthRequired,
            412 => Status::PreconditionFailed,
            413 => Status::PayloadTooLarge,
            414 => Status::UriTooLong,
            415 => Status::UnsupportedMediaType,
            416 => Status::RangeNotSatisfiable,
            417 => Status::ExpectationFailed,
            418 => Status::ImATeapot,
            421 => Status::MisdirectedRequest,
            422 => Status::UnprocessableEntity,
            423 => Status::Locked,
            424 => Status::FailedDependency,
            425 => Status::TooEarly,
            426 => Status::UpgradeRequired,
            428 => Status::PreconditionRequired,
            429 => Status::TooManyRequests,
            431 => Status::RequestHeaderFieldsTooLarge,
            451 => Status::UnavailableForLegalReasons,
            500 => Status::InternalServerError,
            501 => Status::NotImplemented,
            502 => Status::BadGateway,
            503 => Status::ServiceUnavailable,
            504 => Status::GatewayTimeout,
            505 => Status::HttpVersionNotSupported,
            506 => Status::VariantAlsoNegotiates,
            507 => Status::InsufficientStorage,
            508 => Status::LoopDetected,
            509 => Status::BandwidthLimitExceeded,
            510 => Status::NotExtended,
            511 => Status::NetworkAuthenticationRequired,
            code => Status::Custom(code),
        }
    }

    /// The HTTP status code.
    pub fn code(self) -> u16 {
        match self {
            Status::Continue => 100,
            Status::SwitchingProtocols => 101,
            Status::Processing => 102,
            Status::EarlyHints => 103,
            Status::ConnectionTimedOut => 118,
            Status::Ok => 200,
            Status::Created => 201,
            Status::Accepted => 202,
            Status::NonAuthoritativeInformation => 203,
            Status::NoContent => 204,
            Status::ResetContent => 205,
            Status::PartialContent => 206,
            Status::MultiStatus => 207,
            Status::AlreadyReported => 208,
            Status::ImUsed => 226,
            Status::MultipleChoices => 300,
            Status::MovedPermanently => 301,
            Status::Found => 302,
            Status::SeeOther => 303,
            Status::NotModified => 304,
            Status::UseProxy => 305,
            Status::SwitchProxy => 306,
            Status::TemporaryRedirect => 307,
            Status::PermanentRedirect => 308,
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::PaymentRequired => 402,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::NotAcceptable => 406,
            Status::ProxyAuthenticationRequired => 407,
            Status::RequestTimeout => 408,
            Status::Conflict => 409,
            Status::Gone => 410,
            Status::LengthRequired => 411,
            Status::PreconditionFailed => 412,
            Status::PayloadTooLarge => 413,
            Status::UriTooLong => 414,
            Status::UnsupportedMediaType => 415,
            Status::RangeNotSatisfiable => 416,
            Status::ExpectationFailed => 417,
            Status::ImATeapot => 418,
            Status::MisdirectedRequest => 421,
            Status::UnprocessableEntity => 422,
            Status::Locked => 423,
            Status::FailedDependency => 424,
            Status::TooEarly => 425,
            Status::UpgradeRequired => 426,
            Status::PreconditionRequired => 428,
            Status::TooManyRequests => 429,
            Status::RequestHeaderFieldsTooLarge => 431,
            Status::UnavailableForLegalReasons => 451,
            Status::InternalServerError => 500,
            Status::NotImplemented => 501,
            Status::BadGateway => 502,
            Status::ServiceUnavailable => 503,
            Status::GatewayTimeout => 504,
            Status::HttpVersionNotSupported => 505,
            Status::VariantAlsoNegotiates => 506,
            Status::InsufficientStorage => 507,
            Status::LoopDetected => 508,
            Status::BandwidthLimitExceeded => 509,
            Status::NotExtended => 510,
            Status::NetworkAuthenticationRequired => 511,
            Status::Custom(code) => code,
        }
    }

    /// Returns the class of a given status.
    pub fn class(self) -> StatusClass {
        match self.code() / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Success,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            5 => StatusClass::ServerError,
            _ => StatusClass::Custom,
        }
    }

    /// The canonical reason for a given status code, if one is registered.
    pub fn reason(self) -> Option<&'static str> {
        let reason = match self {
            Status::Continue => "Continue",
            Status::SwitchingProtocols => "Switching Protocols",
            Status::Processing => "Processing",
            Status::EarlyHints => "Early Hints",
            Status::ConnectionTimedOut => "Connection timed out",
            Status::Ok => "OK",
            Status::Created => "Created",
            Status::Accepted => "Accepted",
            Status::NonAuthoritativeInformation => "Non-Authoritative Information",
            Status::NoContent => "No Content",
            Status::ResetContent => "Reset Content",
            Status::PartialContent => "Partial Content",
            Status::MultiStatus => "Multi-Status",
            Status::AlreadyReported => "Already Reported",
            Status::ImUsed => "IM Used",
            Status::MultipleChoices => "Multiple Choices",
            Status::MovedPermanently => "Moved Permanently",
            Status::Found => "Found",
            Status::SeeOther => "See Other",
            Status::NotModified => "Not Modified",
            Status::UseProxy => "Use Proxy",
            Status::SwitchProxy => "Switch Proxy",
            Status::TemporaryRedirect => "Temporary Redirect",
            Status::PermanentRedirect => "Permanent Redirect",
            Status::BadRequest => "Bad Request",
            Status::Unauthorized => "Unauthorized",
            Status::PaymentRequired => "Payment Required",
            Status::Forbidden => "Forbidden",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::NotAcceptable => "Not Acceptable",
            Status::ProxyAuthenticationRequired => "Proxy Authentication Required",
            Status::RequestTimeout => "Request Timeout",
            Status::Conflict => "Conflict",
            Status::Gone => "Gone",
            Status::LengthRequired => "Length Required",
            Status::PreconditionFailed => "Precondition Failed",
            Status::PayloadTooLarge => "Payload Too Large",
            Status::UriTooLong => "URI Too Long",
            Status::UnsupportedMediaType => "Unsupported Media Type",
            Status::RangeNotSatisfiable => "Range Not Satisfiable",
            Status::ExpectationFailed => "Expectation Failed",
            Status::ImATeapot => "I'm a teapot",
            Status::MisdirectedRequest => "Misdirected Request",
            Status::UnprocessableEntity => "Unprocessable Entity",
            Status::Locked => "Locked",
            Status::FailedDependency => "Failed Dependency",
            Status::TooEarly => "Too Early",
            Status::UpgradeRequired => "Upgrade Required",
            Status::PreconditionRequired => "Precondition Required",
            Status::TooManyRequests => "Too Many Requests",
            Status::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            Status::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
            Status::InternalServerError => "Internal Server Error",
            Status::NotImplemented => "Not Implemented",
            Status::BadGateway => "Bad Gateway",
            Status::ServiceUnavailable => "Service Unavailable",
            Status::GatewayTimeout => "Gateway Timeout",
            Status::HttpVersionNotSupported => "HTTP Version Not Supported",
            Status::VariantAlsoNegotiates => "Variant Also Negotiates",
            Status::InsufficientStorage => "Insufficient Storage",
            Status::LoopDetected => "Loop Detected",
            Status::BandwidthLimitExceeded => "Bandwidth Limit Exceeded",
            Status::NotExtended => "Not Extended",
            Status::NetworkAuthenticationRequired => "Network Authentication Required",
            Status::Custom(_) => return None,
        };

        Some(reason)
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Status::from_code(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason().unwrap_or_default())
    }
}

/// The reason phrase for a status code, or `None` for codes without a
/// registered phrase.
pub fn reason(code: u16) -> Option<&'static str> {
    Status::from_code(code).reason()
}

/// Format the status line of a response, without the trailing CRLF.
///
/// A code without a registered reason phrase gets an empty phrase,
/// which is still a valid status line: `HTTP/1.1 499 `.
pub fn status_line(version: Version, code: u16) -> String {
    format!("{} {}", version, Status::from_code(code))
}

/// Class of an HTTP status.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum StatusClass {
    /// A provisional response.
    Informational,

    /// The request has succeeded.
    Success,

    /// Further action needs to be taken to fulfill the request.
    Redirection,

    /// The request cannot be fulfilled due to a client error.
    ClientError,

    /// The server failed to fulfill a valid request.
    ServerError,

    /// A custom status.
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons() {
        assert_eq!(reason(404), Some("Not Found"));
        assert_eq!(reason(200), Some("OK"));
        assert_eq!(reason(499), None);
        assert_eq!(reason(118), Some("Connection timed out"));
        assert_eq!(reason(306), Some("Switch Proxy"));
        assert_eq!(reason(509), Some("Bandwidth Limit Exceeded"));
        assert_eq!(reason(0), None);
    }

    #[test]
    fn codes_round_trip() {
        for code in 100..600 {
            assert_eq!(Status::from_code(code).code(), code);
        }
    }

    #[test]
    fn lines() {
        assert_eq!(status_line(Version::Http1_1, 404), "HTTP/1.1 404 Not Found");
        assert_eq!(status_line(Version::Http1_1, 499), "HTTP/1.1 499 ");
        assert_eq!(Status::from_code(503).class(), StatusClass::ServerError);
        assert_eq!(Status::Custom(299).class(), StatusClass::Success);
    }
}
