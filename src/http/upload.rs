//! Uploaded files.
//!
//! Servers describe the files submitted through a form field with five
//! parallel entries: `name`, `type`, `tmp_name`, `error` and `size`.
//! A field declared as a single file input carries a scalar in each
//! entry. A field declared as an array input (`field[]`) carries a
//! sequence in each entry instead, with one slot per submitted file:
//!
//! ```json
//! {
//!     "avatar": { "name": "a.png", "type": "image/png", "tmp_name": "/tmp/upload1", "error": 0, "size": 10 },
//!     "photos": { "name": ["a.png", "b.png"], "type": ["image/png", "image/png"],
//!                 "tmp_name": ["/tmp/upload2", "/tmp/upload3"], "error": [0, 0], "size": [10, 20] }
//! }
//! ```
//!
//! [`normalize`] turns either shape into per-file [`UploadRecord`]s.

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::fmt;

/// The raw metadata the server reported for one form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawUpload {
    pub name: Option<Field<String>>,
    #[serde(rename = "type")]
    pub mime_type: Option<Field<String>>,
    pub tmp_name: Option<Field<String>>,
    pub error: Option<Field<u8>>,
    pub size: Option<Field<u64>>,
}

/// A single upload entry, either a scalar or one slot per file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Field<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Field<T> {
    fn one(&self) -> Option<&T> {
        match self {
            Field::One(value) => Some(value),
            Field::Many(_) => None,
        }
    }

    fn at(&self, index: usize) -> Option<&T> {
        match self {
            Field::One(_) => None,
            Field::Many(values) => values.get(index),
        }
    }
}

/// Raw upload metadata for every field of a form, keyed by field name.
pub type RawUploads = HashMap<String, RawUpload>;

/// Parse the upload metadata of a form from JSON.
#[cfg(feature = "json")]
pub fn from_json(json: &str) -> Result<RawUploads, crate::Error> {
    Ok(serde_json::from_str(json)?)
}

/// Reshape the raw metadata of a form field into per-file records.
///
/// The field is treated as an array input when its `name` entry is a
/// sequence. Records are then produced in slot order; a slot missing
/// from one of the other entries takes that entry's default.
pub fn normalize(raw: &RawUpload) -> Upload {
    match &raw.name {
        Some(Field::Many(names)) => Upload::Multiple(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    UploadRecord::new(
                        Some(name),
                        raw.mime_type.as_ref().and_then(|f| f.at(i)),
                        raw.tmp_name.as_ref().and_then(|f| f.at(i)),
                        raw.error.as_ref().and_then(|f| f.at(i)),
                        raw.size.as_ref().and_then(|f| f.at(i)),
                    )
                })
                .collect(),
        ),
        name => Upload::Single(UploadRecord::new(
            name.as_ref().and_then(Field::one),
            raw.mime_type.as_ref().and_then(Field::one),
            raw.tmp_name.as_ref().and_then(Field::one),
            raw.error.as_ref().and_then(Field::one),
            raw.size.as_ref().and_then(Field::one),
        )),
    }
}

/// The files submitted through a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upload {
    /// The field was a single file input.
    Single(UploadRecord),
    /// The field was an array input, with one record per file.
    Multiple(Vec<UploadRecord>),
}

impl Upload {
    pub fn is_multiple(&self) -> bool {
        matches!(self, Upload::Multiple(_))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UploadRecord> {
        match self {
            Upload::Single(record) => std::slice::from_ref(record).iter(),
            Upload::Multiple(records) => records.iter(),
        }
    }

    pub fn into_vec(self) -> Vec<UploadRecord> {
        match self {
            Upload::Single(record) => vec![record],
            Upload::Multiple(records) => records,
        }
    }
}

/// A file that was uploaded with a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadRecord {
    /// The file name on the client.
    pub name: Option<String>,
    /// The mime type reported by the client.
    pub mime_type: Option<String>,
    /// The size of the file in bytes.
    pub size: u64,
    /// Where the server stored the file while handling the request.
    ///
    /// Meaningless outside of the serving process.
    pub tmp_name: Option<String>,
    pub error: UploadError,
}

impl UploadRecord {
    fn new(
        name: Option<&String>,
        mime_type: Option<&String>,
        tmp_name: Option<&String>,
        error: Option<&u8>,
        size: Option<&u64>,
    ) -> Self {
        UploadRecord {
            name: name.cloned(),
            mime_type: mime_type.cloned(),
            size: size.copied().unwrap_or(0),
            tmp_name: tmp_name.cloned(),
            error: error.copied().map(UploadError::from_code).unwrap_or_default(),
        }
    }

    /// Returns `true` if the file was received completely.
    pub fn is_ok(&self) -> bool {
        self.error == UploadError::None
    }
}

/// The outcome of receiving an uploaded file, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UploadError {
    /// The file was uploaded successfully.
    #[default]
    None,
    /// The file exceeds the upload size limit of the server.
    IniSize,
    /// The file exceeds the size limit declared by the form.
    FormSize,
    /// The file was only partially uploaded.
    Partial,
    /// No file was uploaded.
    NoFile,
    /// The server has no temporary directory to store the file in.
    NoTmpDir,
    /// The file could not be written to disk.
    CantWrite,
    /// A server extension stopped the upload.
    Extension,
    /// A code this library does not know about.
    Unknown(u8),
}

impl UploadError {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => UploadError::None,
            1 => UploadError::IniSize,
            2 => UploadError::FormSize,
            3 => UploadError::Partial,
            4 => UploadError::NoFile,
            6 => UploadError::NoTmpDir,
            7 => UploadError::CantWrite,
            8 => UploadError::Extension,
            code => UploadError::Unknown(code),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            UploadError::None => 0,
            UploadError::IniSize => 1,
            UploadError::FormSize => 2,
            UploadError::Partial => 3,
            UploadError::NoFile => 4,
            UploadError::NoTmpDir => 6,
            UploadError::CantWrite => 7,
            UploadError::Extension => 8,
            UploadError::Unknown(code) => code,
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::None => f.write_str("file uploaded successfully"),
            UploadError::IniSize => f.write_str("file exceeds the server's upload size limit"),
            UploadError::FormSize => f.write_str("file exceeds the form's upload size limit"),
            UploadError::Partial => f.write_str("file was only partially uploaded"),
            UploadError::NoFile => f.write_str("no file was uploaded"),
            UploadError::NoTmpDir => f.write_str("missing a temporary directory"),
            UploadError::CantWrite => f.write_str("failed to write file to disk"),
            UploadError::Extension => f.write_str("upload stopped by an extension"),
            UploadError::Unknown(code) => write!(f, "unknown upload error code {}", code),
        }
    }
}
