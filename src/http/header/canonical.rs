use super::Headers;
use crate::http::{ByteStr, Env};

const PREFIX: &str = "HTTP_";

/// Collect the request headers from a server environment.
///
/// Every `HTTP_*` variable becomes a header named by
/// [`canonical_name`]. `CONTENT_TYPE` and `CONTENT_LENGTH` are passed
/// without the prefix by servers and are mapped explicitly. All other
/// variables are ignored, as are variables with a null value.
///
/// When two variables produce the same name, the later one wins.
pub fn canonicalize(env: &Env) -> Headers {
    let mut headers = Headers::new();

    for (key, value) in env.iter() {
        let Some(value) = value else {
            continue;
        };

        let name = if let Some(rest) = key.strip_prefix(PREFIX) {
            ByteStr::from(canonical_name(rest))
        } else if key == Env::CONTENT_TYPE {
            ByteStr::from_static("Content-Type")
        } else if key == Env::CONTENT_LENGTH {
            ByteStr::from_static("Content-Length")
        } else {
            continue;
        };

        headers.insert((name, value));
    }

    headers
}

/// Convert an environment key (without the `HTTP_` prefix) into a
/// header name: `ACCEPT_LANGUAGE` becomes `Accept-Language`.
///
/// Words are separated by underscores or ASCII whitespace. Each word
/// is lowercased with its first character in uppercase, and words are
/// joined with `-`.
pub fn canonical_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());

    for (i, word) in key.split(is_separator).enumerate() {
        if i > 0 {
            name.push('-');
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.extend(chars.flat_map(char::to_lowercase));
        }
    }

    name
}

fn is_separator(c: char) -> bool {
    c == '_' || c.is_ascii_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(canonical_name("ACCEPT_LANGUAGE"), "Accept-Language");
        assert_eq!(canonical_name("HOST"), "Host");
        assert_eq!(canonical_name("X_FORWARDED_FOR"), "X-Forwarded-For");
        assert_eq!(canonical_name("DNT"), "Dnt");
        assert_eq!(canonical_name(""), "");
        assert_eq!(canonical_name("X FOO"), "X-Foo");
        assert_eq!(canonical_name("USER_AGENT\tV2"), "User-Agent-V2");
    }

    #[test]
    fn prefixed_and_content_headers() {
        let mut env: Env = [
            ("HTTP_ACCEPT_LANGUAGE", "en"),
            ("CONTENT_TYPE", "text/plain"),
            ("CONTENT_LENGTH", "42"),
            ("REQUEST_URI", "/"),
            ("SERVER_NAME", "localhost"),
        ]
        .into_iter()
        .collect();
        env.insert_null("HTTP_REFERER");

        let headers = canonicalize(&env);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("Accept-Language"), Some("en"));
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));
        assert_eq!(headers.get("Content-Length"), Some("42"));
        assert!(!headers.contains("Referer"));
    }

    #[test]
    fn later_entries_win() {
        let env: Env = [("HTTP_CONTENT_TYPE", "a"), ("CONTENT_TYPE", "b")]
            .into_iter()
            .collect();

        assert_eq!(canonicalize(&env).get("Content-Type"), Some("b"));
    }

    #[test]
    fn whitespace_in_keys() {
        let env: Env = [("HTTP_X FOO", "1")].into_iter().collect();
        let headers = canonicalize(&env);

        assert_eq!(headers.get("X-Foo"), Some("1"));
        assert!(!headers.contains("X foo"));
    }
}
