//! Structured HTTP requests from a server environment snapshot.
//!
//! A web server hands request-handling code a flat bag of CGI-style
//! variables (`REQUEST_URI`, `QUERY_STRING`, `HTTP_ACCEPT_LANGUAGE`, ...).
//! [`Normalizer`] turns such a snapshot into a [`Request`], and [`Response`]
//! describes what should be written back to the client.
//!
//! ```
//! use bison_env::{Config, Env, Normalizer};
//!
//! let env: Env = [
//!     ("REQUEST_METHOD", "GET"),
//!     ("REQUEST_URI", "/index.php/users?page=2"),
//!     ("QUERY_STRING", "page=2"),
//!     ("HTTP_ACCEPT_LANGUAGE", "en-US;q=0.8,de"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let req = Normalizer::new(Config::default()).normalize(&env).unwrap();
//! assert_eq!(req.path(), Some("/users"));
//! assert_eq!(req.var("page"), Some("2"));
//! assert_eq!(req.languages().get("de"), Some(1.0));
//! ```

mod config;
mod error;

pub mod http;

pub use config::Config;
pub use error::Error;
pub use http::{Env, Normalizer, Request, Response};
