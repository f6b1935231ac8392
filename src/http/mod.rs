pub mod header;
pub mod status;
pub mod upload;

mod accept;
mod body;
mod bytestr;
mod cookie;
mod env;
mod method;
mod protocol;
mod request;
mod response;
mod version;

pub use accept::{AcceptedEncodings, AcceptedLanguages};
pub use body::{Body, BoxError};
pub use bytes::Bytes;
pub use bytestr::ByteStr;
pub use cookie::Cookie;
pub use env::Env;
pub use header::{ContentType, Headers};
pub use method::Method;
pub use protocol::Protocol;
pub use request::{Normalizer, Params, Request};
pub use response::{Response, ResponseHeaders};
pub use status::Status;
pub use upload::{RawUpload, Upload, UploadError, UploadRecord};
pub use version::Version;
