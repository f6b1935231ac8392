use std::fmt;

/// The protocol a request was received over.
///
/// `Unknown` is distinct from `Http`: a server that does not report the
/// `HTTPS` variable at all tells us nothing about the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    Http,
    Https,
    #[default]
    Unknown,
}

impl Protocol {
    /// Derive the protocol from the value of the `HTTPS` variable.
    pub fn from_https_flag(flag: Option<&str>) -> Protocol {
        match flag {
            Some("on") => Protocol::Https,
            Some(_) => Protocol::Http,
            None => Protocol::Unknown,
        }
    }

    /// The URL scheme of this protocol, if known.
    pub fn scheme(self) -> Option<&'static str> {
        match self {
            Protocol::Http => Some("http"),
            Protocol::Https => Some("https"),
            Protocol::Unknown => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme().unwrap_or("unknown"))
    }
}
