use bison_env::http::{status, Cookie, Status, Version};
use bison_env::Response;

use std::time::{Duration, UNIX_EPOCH};

#[test]
fn status_lines() {
    assert_eq!(Response::new(404).status_line(), "HTTP/1.1 404 Not Found");
    assert_eq!(status::reason(404), Some("Not Found"));

    assert_eq!(Response::new(499).status_line(), "HTTP/1.1 499 ");
    assert_eq!(status::reason(499), None);
    assert_eq!(Status::from_code(499), Status::Custom(499));

    let mut res = Response::new(200);
    res.set_version(Version::Http1_0);
    assert_eq!(res.status_line(), "HTTP/1.0 200 OK");
}

#[test]
fn head() {
    let mut res = Response::new(200);
    res.add_header("Cache-Control", "no-store");
    res.add_cookie(
        Cookie::new("session", "a b")
            .with_expires(UNIX_EPOCH + Duration::from_secs(784_111_777))
            .with_path("/")
            .with_http_only(true),
    );
    res.add_cookie(Cookie::new("theme", "dark").with_secure(true));
    res.remove_cookie("theme");

    let mut out = Vec::new();
    res.write_head(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         Cache-Control: no-store\r\n\
         Set-Cookie: session=a%20b; Expires=Sun, 06 Nov 1994 08:49:37 GMT; Path=/; HttpOnly\r\n\
         Set-Cookie: theme=deleted; Expires=Thu, 01 Jan 1970 00:00:01 GMT; Max-Age=0\r\n\
         \r\n"
    );
}

#[test]
fn into_http() {
    let mut res = Response::new(418);
    res.add_header("X-Teapot", "yes");
    res.set_body(String::from("short and stout"));

    let res = res.into_http().unwrap();
    assert_eq!(res.status().as_u16(), 418);
    assert_eq!(res.version(), http::Version::HTTP_11);
    assert_eq!(res.headers()["x-teapot"], "yes");
    assert_eq!(res.headers()["content-type"], "text/html; charset=utf-8");
    assert_eq!(res.body().as_bytes(), Some(&b"short and stout"[..]));
}
