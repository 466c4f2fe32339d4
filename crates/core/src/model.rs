//! Data model returned by the resource service
//!
//! Both types are per-call snapshots decoded from JSON response bodies; the
//! service owns the canonical state and nothing here is persisted locally.

use serde::{Deserialize, Serialize};

/// Metadata snapshot of one stored object, returned by `stat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Content digest
    pub hash: String,

    /// Size in bytes
    pub fsize: i64,

    /// Creation timestamp, in the service's clock units
    #[serde(rename = "putTime")]
    pub put_time: i64,

    /// Stored MIME type
    #[serde(rename = "mimeType")]
    pub mime_type: String,

    /// Free-form customer tag
    #[serde(default)]
    pub customer: String,

    /// Storage type code
    #[serde(rename = "type", default)]
    pub file_type: i32,
}

/// Download descriptor returned by the `get` metadata call.
///
/// Used only to locate the bytes to fetch; discarded once the download
/// completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// Source URL to download the bytes from
    pub url: String,

    /// Content digest
    pub hash: String,

    /// MIME type of the content
    #[serde(rename = "mimeType")]
    pub mime_type: String,

    /// Size in bytes
    pub fsize: i64,

    /// Expiry timestamp of the source URL
    #[serde(rename = "expires")]
    pub expiry: i64,

    /// Version tag
    #[serde(default)]
    pub version: String,
}
