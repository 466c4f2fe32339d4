//! Resource identity encoding
//!
//! A stored object is addressed by a (bucket, key) pair. The canonical wire
//! form joins the two with a colon, and request paths carry the URL-safe
//! base64 encoding of that joined string as a single segment.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

/// A (bucket, key) pair addressing one stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPath {
    /// Bucket name
    pub bucket: String,
    /// Object key within the bucket
    pub key: String,
}

impl EntryPath {
    /// Create a new EntryPath
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Canonical string form, `bucket:key`.
    ///
    /// Two entries are the same resource exactly when their canonical forms
    /// are equal; keeping the joined form intact is the caller's
    /// responsibility.
    pub fn to_entry_uri(&self) -> String {
        format!("{}:{}", self.bucket, self.key)
    }

    /// URL-safe path segment for this entry.
    pub fn encode(&self) -> String {
        encode_segment(&self.to_entry_uri())
    }
}

impl std::fmt::Display for EntryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.bucket, self.key)
    }
}

/// Encode an arbitrary string as a URL-safe path segment.
///
/// Standard URL-safe base64 (alphabet `A-Z a-z 0-9 - _`) with `=` padding
/// retained. Encoding is total; any input produces a valid segment.
pub fn encode_segment(s: &str) -> String {
    URL_SAFE.encode(s.as_bytes())
}
