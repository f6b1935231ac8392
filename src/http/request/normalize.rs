use super::{Params, Request};
use crate::http::{cookie, header, AcceptedEncodings, AcceptedLanguages, ByteStr, Env};
use crate::http::{Method, Protocol};
use crate::{Config, Error};

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Builds [`Request`]s from server environments.
///
/// The normalizer owns the [`Config`] it was created with, so every
/// request it builds sees the same base path.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: Config,
}

impl Normalizer {
    pub fn new(config: Config) -> Normalizer {
        Normalizer { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a request from a server environment.
    ///
    /// Every variable is optional: missing or unparseable values leave
    /// the corresponding field empty, and a missing `REQUEST_TIME`
    /// means the request was received now. The only error is an
    /// `Accept-Language` header with a weight that is not a number
    /// between 0 and 1.
    ///
    /// `REQUEST_URI` has the configured base path removed when it starts
    /// with it, and the path is everything before the last `?` of the
    /// resulting URI. The query comes from `QUERY_STRING` and is not
    /// checked against the URI.
    pub fn normalize(&self, env: &Env) -> Result<Request, Error> {
        normalize(env, &self.config)
    }

    /// Build a request if the environment describes one.
    ///
    /// Returns `None` when `REQUEST_METHOD` is not set, which is the
    /// case when a program is run outside of a web server.
    pub fn current(&self, env: &Env) -> Option<Result<Request, Error>> {
        env.get(Env::REQUEST_METHOD)?;
        Some(self.normalize(env))
    }
}

pub(super) fn normalize(env: &Env, config: &Config) -> Result<Request, Error> {
    let protocol = Protocol::from_https_flag(env.get(Env::HTTPS).map(ByteStr::as_str));

    let uri = env
        .get(Env::REQUEST_URI)
        .map(|raw| rebase(raw, &config.base_path));

    let path = uri.as_ref().map(|uri| match uri.rfind('?') {
        Some(end) => uri.slice_ref(&uri[..end]),
        None => uri.clone(),
    });

    let languages = env
        .get(Env::HTTP_ACCEPT_LANGUAGE)
        .map(AcceptedLanguages::parse)
        .transpose()?
        .unwrap_or_default();

    let encodings = env
        .get(Env::HTTP_ACCEPT_ENCODING)
        .map(AcceptedEncodings::parse)
        .unwrap_or_default();

    let cookies = env
        .get(Env::HTTP_COOKIE)
        .map(|header| cookie::parse_header(header).collect())
        .unwrap_or_else(Params::new);

    let request = Request {
        protocol,
        host: env.get(Env::SERVER_NAME).cloned(),
        port: port(env),
        path,
        query: env.get(Env::QUERY_STRING).cloned(),
        uri,
        headers: header::canonicalize(env),
        method: env.get(Env::REQUEST_METHOD).cloned().map(Method::from),
        time: request_time(env),
        languages,
        encodings,
        user_agent: env.get(Env::HTTP_USER_AGENT).cloned(),
        remote_addr: env.get(Env::REMOTE_ADDR).cloned(),
        cookies,
        ..Request::new()
    };

    tracing::debug!(
        method = ?request.method(),
        uri = ?request.uri(),
        %protocol,
        "normalized request"
    );

    Ok(request)
}

fn rebase(raw: &ByteStr, base_path: &str) -> ByteStr {
    match raw.strip_prefix(base_path) {
        Some(rest) => {
            tracing::debug!(uri = %raw, base_path, "stripped base path");
            raw.slice_ref(rest)
        }
        None => raw.clone(),
    }
}

fn port(env: &Env) -> Option<u16> {
    let port = env.get(Env::SERVER_PORT)?;

    match port.parse() {
        Ok(port) => Some(port),
        Err(err) => {
            tracing::warn!(%port, %err, "ignoring invalid SERVER_PORT");
            None
        }
    }
}

fn request_time(env: &Env) -> SystemTime {
    let Some(time) = env.get(Env::REQUEST_TIME) else {
        return SystemTime::now();
    };

    let secs = match time.trim().parse::<i64>() {
        Ok(secs) => secs,
        Err(err) => {
            tracing::warn!(%time, %err, "ignoring invalid REQUEST_TIME");
            return SystemTime::now();
        }
    };

    let offset = Duration::from_secs(secs.unsigned_abs());
    let parsed = if secs >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    };

    parsed.unwrap_or_else(|| {
        tracing::warn!(%time, "ignoring out of range REQUEST_TIME");
        SystemTime::now()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<const N: usize>(vars: [(&str, &str); N]) -> Env {
        vars.into_iter().collect()
    }

    #[test]
    fn protocol() {
        let normalizer = Normalizer::default();
        let protocol = |env: Env| normalizer.normalize(&env).unwrap().protocol();

        assert_eq!(protocol(env([("HTTPS", "on")])), Protocol::Https);
        assert_eq!(protocol(env([("HTTPS", "off")])), Protocol::Http);
        assert_eq!(protocol(env([("HTTPS", "")])), Protocol::Http);
        assert_eq!(protocol(Env::new()), Protocol::Unknown);

        let mut null = Env::new();
        null.insert_null("HTTPS");
        assert_eq!(protocol(null), Protocol::Unknown);
    }

    #[test]
    fn rebase_shares_buffer() {
        let raw = ByteStr::from("/index.php/foo");
        let uri = rebase(&raw, "/index.php");
        assert_eq!(uri, "/foo");
        assert_eq!(uri.as_ptr(), raw[10..].as_ptr());

        assert_eq!(rebase(&raw, "/app.php"), "/index.php/foo");
    }

    #[test]
    fn path_ends_at_last_question_mark() {
        let req = Request::from_env(
            &env([("REQUEST_URI", "/a?b?c")]),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(req.uri(), Some("/a?b?c"));
        assert_eq!(req.path(), Some("/a?b"));
    }

    #[test]
    fn scalars() {
        let req = Normalizer::default()
            .normalize(&env([
                ("SERVER_NAME", "example.com"),
                ("SERVER_PORT", "8080"),
                ("REQUEST_METHOD", "PUT"),
                ("HTTP_USER_AGENT", "curl/8.0"),
                ("REMOTE_ADDR", "10.0.0.1"),
                ("REQUEST_TIME", "784111777"),
                ("HTTP_COOKIE", "session=abc; theme=dark"),
            ]))
            .unwrap();

        assert_eq!(req.host(), Some("example.com"));
        assert_eq!(req.port(), Some(8080));
        assert_eq!(req.method(), Some(&Method::Put));
        assert_eq!(req.user_agent(), Some("curl/8.0"));
        assert_eq!(req.remote_addr(), Some("10.0.0.1"));
        assert_eq!(req.time(), UNIX_EPOCH + Duration::from_secs(784_111_777));
        assert_eq!(req.cookie("session"), Some("abc"));
        assert_eq!(req.cookie("theme"), Some("dark"));
    }

    #[test]
    fn invalid_scalars_are_ignored() {
        let before = SystemTime::now();
        let req = Normalizer::default()
            .normalize(&env([("SERVER_PORT", "http"), ("REQUEST_TIME", "soon")]))
            .unwrap();

        assert_eq!(req.port(), None);
        assert!(req.time() >= before);
    }

    #[test]
    fn request_time_before_epoch() {
        let req = Normalizer::default()
            .normalize(&env([("REQUEST_TIME", "-86400")]))
            .unwrap();

        assert_eq!(req.time(), UNIX_EPOCH - Duration::from_secs(86_400));
    }

    #[test]
    fn current() {
        let normalizer = Normalizer::default();

        assert!(normalizer.current(&Env::new()).is_none());
        assert!(normalizer
            .current(&env([("REQUEST_METHOD", "GET")]))
            .unwrap()
            .is_ok());
    }
}
