use bison_env::http::{Method, Protocol};
use bison_env::{Config, Env, Error, Normalizer, Request};

use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn env<const N: usize>(vars: [(&str, &str); N]) -> Env {
    vars.into_iter().collect()
}

#[test]
fn empty_env() {
    init_tracing();

    let before = SystemTime::now();
    let mut req = Normalizer::default().normalize(&Env::new()).unwrap();
    let after = SystemTime::now();

    assert!(req.time() >= before && req.time() <= after);
    assert_eq!(req.protocol(), Protocol::Unknown);
    assert_eq!(req.host(), None);
    assert_eq!(req.port(), None);
    assert_eq!(req.path(), None);
    assert_eq!(req.query(), None);
    assert_eq!(req.uri(), None);
    assert_eq!(req.method(), None);
    assert_eq!(req.user_agent(), None);
    assert_eq!(req.remote_addr(), None);
    assert!(req.headers().is_empty());
    assert!(req.languages().is_empty());
    assert!(req.encodings().is_empty());
    assert!(req.cookies().is_empty());

    let mut empty = Request::new();
    empty.set_time(UNIX_EPOCH);
    req.set_time(UNIX_EPOCH);
    assert_eq!(req, empty);
}

#[test]
fn base_path() {
    init_tracing();

    let normalizer = Normalizer::new(Config::default().with_base_path("/foo/bar.php"));

    let req = normalizer
        .normalize(&env([("REQUEST_URI", "/foo/bar.php/test/path?foo=bar")]))
        .unwrap();
    assert_eq!(req.uri(), Some("/test/path?foo=bar"));
    assert_eq!(req.path(), Some("/test/path"));

    let req = normalizer
        .normalize(&env([("REQUEST_URI", "/other/test/path")]))
        .unwrap();
    assert_eq!(req.uri(), Some("/other/test/path"));
    assert_eq!(req.path(), Some("/other/test/path"));
}

#[test]
fn default_base_path() {
    let req = Normalizer::default()
        .normalize(&env([("REQUEST_URI", "/index.php/users")]))
        .unwrap();

    assert_eq!(req.uri(), Some("/users"));
}

#[test]
fn config_from_toml() {
    let config = Config::from_toml(r#"base_path = "/app.php""#).unwrap();
    let req = Request::from_env(&env([("REQUEST_URI", "/app.php/")]), &config).unwrap();

    assert_eq!(req.uri(), Some("/"));
}

#[test]
fn query_is_not_reconciled_with_uri() {
    let req = Normalizer::default()
        .normalize(&env([
            ("REQUEST_URI", "/search?q=rust"),
            ("QUERY_STRING", "q=go"),
        ]))
        .unwrap();

    assert_eq!(req.path(), Some("/search"));
    assert_eq!(req.query(), Some("q=go"));
    assert_eq!(req.var("q"), Some("go"));
}

#[test]
fn accept_language() {
    let req = Normalizer::default()
        .normalize(&env([("HTTP_ACCEPT_LANGUAGE", "en-US;q=0.8,fr;q=0.9,de")]))
        .unwrap();

    let languages = req.languages();
    assert_eq!(languages.len(), 3);
    assert_eq!(languages.get("en-US"), Some(0.8));
    assert_eq!(languages.get("fr"), Some(0.9));
    assert_eq!(languages.get("de"), Some(1.0));
    assert_eq!(languages.preferred(), Some("de"));
}

#[test]
fn malformed_accept_language() {
    let err = Normalizer::default()
        .normalize(&env([("HTTP_ACCEPT_LANGUAGE", "en;q=high")]))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedHeaderValue { name: "Accept-Language", .. }
    ));
}

#[test]
fn accept_encoding() {
    let req = Normalizer::default()
        .normalize(&env([("HTTP_ACCEPT_ENCODING", " gzip, deflate,,br, ")]))
        .unwrap();

    assert!(req.encodings().iter().eq(["gzip", "deflate", "br"]));
}

#[test]
fn headers() {
    let req = Normalizer::default()
        .normalize(&env([
            ("HTTP_ACCEPT_LANGUAGE", "en"),
            ("CONTENT_TYPE", "text/plain"),
            ("CONTENT_LENGTH", "12"),
            ("HTTP_X_FORWARDED_FOR", "10.0.0.1"),
            ("SERVER_NAME", "example.com"),
        ]))
        .unwrap();

    assert_eq!(req.headers().len(), 4);
    assert_eq!(req.header("Accept-Language"), Some("en"));
    assert_eq!(req.header("Content-Type"), Some("text/plain"));
    assert_eq!(req.header("Content-Length"), Some("12"));
    assert_eq!(req.header("X-Forwarded-For"), Some("10.0.0.1"));
    assert_eq!(req.header("x-forwarded-for"), Some("10.0.0.1"));
}

#[test]
fn idempotent() {
    let env = env([
        ("HTTPS", "on"),
        ("REQUEST_METHOD", "POST"),
        ("REQUEST_TIME", "1700000000"),
        ("REQUEST_URI", "/index.php/a/b?c=d"),
        ("QUERY_STRING", "c=d"),
        ("SERVER_NAME", "example.com"),
        ("SERVER_PORT", "443"),
        ("HTTP_ACCEPT_LANGUAGE", "en;q=0.5,nl"),
        ("HTTP_ACCEPT_ENCODING", "gzip"),
        ("HTTP_COOKIE", "id=7"),
    ]);

    let normalizer = Normalizer::default();
    let a = normalizer.normalize(&env).unwrap();
    let b = normalizer.normalize(&env).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.protocol(), Protocol::Https);
    assert_eq!(a.method(), Some(&Method::Post));
    assert_eq!(a.time(), UNIX_EPOCH + Duration::from_secs(1_700_000_000));
    assert_eq!(a.url("https"), "https://example.com/a/b?c=d");
}

#[test]
fn from_http_parts() {
    let (parts, ()) = http::Request::builder()
        .method("DELETE")
        .uri("https://example.com:8443/index.php/items/3?force=1")
        .header("Accept-Encoding", "br")
        .header("Cookie", "a=1")
        .header("Cookie", "b=2")
        .body(())
        .unwrap()
        .into_parts();

    let req = Normalizer::default()
        .normalize(&Env::from_parts(&parts))
        .unwrap();

    assert_eq!(req.method(), Some(&Method::Delete));
    assert_eq!(req.protocol(), Protocol::Https);
    assert_eq!(req.host(), Some("example.com"));
    assert_eq!(req.port(), Some(8443));
    assert_eq!(req.uri(), Some("/items/3?force=1"));
    assert_eq!(req.path(), Some("/items/3"));
    assert_eq!(req.var("force"), Some("1"));
    assert_eq!(req.cookie("a"), Some("1"));
    assert_eq!(req.cookie("b"), Some("2"));
    assert!(req.encodings().contains("br"));
}
