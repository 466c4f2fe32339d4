//! RPC transport capability
//!
//! The operations client issues requests through this trait rather than a
//! concrete HTTP stack, so the transport can be swapped and tests can run
//! against mocks. kodo-client provides the signing implementation.

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncRead;

use crate::error::Result;

/// Status and body stream of a raw GET.
///
/// The body is a live stream owned by the caller; it must be consumed or
/// dropped on every exit path.
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Box<dyn AsyncRead + Send + Unpin>,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// One-request-per-call transport to the resource service.
///
/// `call` covers the signed control-plane operations: a 2xx body comes back
/// raw for the caller to decode or discard, and a non-2xx response is
/// converted to [`Error::Api`](crate::Error::Api) before it reaches the
/// caller. `get` is the plain download primitive; status interpretation is
/// left to the caller. Neither retries, batches, or caches.
#[async_trait]
pub trait Rpc: Send + Sync {
    /// Issue one signed request to `url` and return the raw 2xx body.
    async fn call(&self, url: &str) -> Result<Bytes>;

    /// Issue one GET to `url` and hand back the live response.
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn response(status: u16) -> RawResponse {
        RawResponse {
            status,
            body: Box::new(Cursor::new(Vec::new())),
        }
    }

    #[test]
    fn test_is_success_covers_2xx_only() {
        assert!(!response(199).is_success());
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(300).is_success());
        assert!(!response(404).is_success());
        assert!(!response(614).is_success());
    }

    #[test]
    fn test_debug_omits_body() {
        let formatted = format!("{:?}", response(200));
        assert!(formatted.contains("status: 200"));
    }
}
