//! Resource-service operations client
//!
//! One method per control-plane operation. Each builds a request path from a
//! tagged [`RsOp`], issues it through the injected transport, and maps the
//! response. Every operation is a single round trip; no retries, no caching,
//! no per-call state.

use std::path::Path;
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::AsyncReadExt;

use kodo_core::{Entry, EntryPath, Error, FetchResult, Result, Rpc, RsConfig, RsOp};

use crate::mac::Mac;
use crate::transport::QboxRpc;

/// Client for the resource-service control plane.
///
/// Holds one transport plus the configured host and nothing else, so a
/// single value can be shared freely across tasks.
#[derive(Clone)]
pub struct RsClient {
    rpc: Arc<dyn Rpc>,
    rs_host: String,
}

impl RsClient {
    /// Client over a default HTTP transport signed with `mac`
    pub fn new(mac: Mac, config: RsConfig) -> Self {
        Self::with_rpc(Arc::new(QboxRpc::new(mac)), config)
    }

    /// Client over an already-built transport, used as-is
    pub fn with_rpc(rpc: Arc<dyn Rpc>, config: RsConfig) -> Self {
        Self {
            rpc,
            rs_host: config.rs_host,
        }
    }

    /// Client signing with `mac` over a caller-supplied HTTP client,
    /// optionally binding requests to a fixed remote IP
    pub fn new_with(
        mac: Mac,
        http: reqwest::Client,
        bind_remote_ip: Option<String>,
        config: RsConfig,
    ) -> Self {
        Self::with_rpc(
            Arc::new(QboxRpc::with_http(mac, http, bind_remote_ip)),
            config,
        )
    }

    fn url_for(&self, op: &RsOp) -> String {
        format!("{}{}", self.rs_host, op.to_path())
    }

    /// Issue an operation whose response body carries nothing.
    async fn issue(&self, op: RsOp) -> Result<()> {
        self.rpc.call(&self.url_for(&op)).await?;
        Ok(())
    }

    /// Metadata snapshot of one stored object.
    pub async fn stat(&self, bucket: &str, key: &str) -> Result<Entry> {
        let body = self
            .rpc
            .call(&self.url_for(&RsOp::Stat(EntryPath::new(bucket, key))))
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Delete one stored object.
    pub async fn delete(&self, bucket: &str, key: &str) -> Result<()> {
        self.issue(RsOp::Delete(EntryPath::new(bucket, key))).await
    }

    /// Move an object. With `force` an existing destination is overwritten;
    /// without it the service rejects the call when the destination exists
    /// (status 614), surfaced as [`Error::Api`].
    pub async fn move_to(
        &self,
        src_bucket: &str,
        src_key: &str,
        dest_bucket: &str,
        dest_key: &str,
        force: bool,
    ) -> Result<()> {
        self.issue(RsOp::Move {
            src: EntryPath::new(src_bucket, src_key),
            dest: EntryPath::new(dest_bucket, dest_key),
            force,
        })
        .await
    }

    /// Copy an object; `force` as for [`RsClient::move_to`].
    pub async fn copy_to(
        &self,
        src_bucket: &str,
        src_key: &str,
        dest_bucket: &str,
        dest_key: &str,
        force: bool,
    ) -> Result<()> {
        self.issue(RsOp::Copy {
            src: EntryPath::new(src_bucket, src_key),
            dest: EntryPath::new(dest_bucket, dest_key),
            force,
        })
        .await
    }

    /// Change an object's stored MIME type.
    pub async fn change_mime(&self, bucket: &str, key: &str, mime: &str) -> Result<()> {
        self.issue(RsOp::ChangeMime {
            entry: EntryPath::new(bucket, key),
            mime: mime.to_owned(),
        })
        .await
    }

    /// Change an object's storage type code.
    pub async fn change_type(&self, bucket: &str, key: &str, file_type: i32) -> Result<()> {
        self.issue(RsOp::ChangeType {
            entry: EntryPath::new(bucket, key),
            file_type,
        })
        .await
    }

    /// Schedule the object's deletion `days` days from now.
    pub async fn delete_after_days(&self, bucket: &str, key: &str, days: u32) -> Result<()> {
        self.issue(RsOp::DeleteAfterDays {
            entry: EntryPath::new(bucket, key),
            days,
        })
        .await
    }

    /// Ask the service to pull the object from its upstream source.
    pub async fn prefetch(&self, bucket: &str, key: &str) -> Result<()> {
        self.issue(RsOp::Prefetch(EntryPath::new(bucket, key))).await
    }

    /// Fetch an object's bytes into a new local file.
    ///
    /// Two round trips: the `/get/` call resolves a download descriptor,
    /// then the descriptor's URL is fetched and its body streamed into
    /// `dest` verbatim. `dest` is created with exclusive-create semantics
    /// and only after both remote steps succeeded; an existing file is never
    /// touched and is reported as [`Error::DestinationExists`]. A non-2xx
    /// download response drains the body for diagnostics and returns
    /// [`Error::Download`].
    pub async fn get(&self, bucket: &str, key: &str, dest: impl AsRef<Path>) -> Result<()> {
        let dest = dest.as_ref();

        let body = self
            .rpc
            .call(&self.url_for(&RsOp::Get(EntryPath::new(bucket, key))))
            .await?;
        let fetched: FetchResult = serde_json::from_slice(&body)?;

        let mut response = self.rpc.get(&fetched.url).await?;
        if !response.is_success() {
            let mut diagnostics = Vec::new();
            response.body.read_to_end(&mut diagnostics).await?;
            let body = String::from_utf8_lossy(&diagnostics).into_owned();
            tracing::error!(status = response.status, %body, "fetch download rejected");
            return Err(Error::Download {
                status: response.status,
                body,
            });
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dest)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    Error::DestinationExists(dest.display().to_string())
                }
                _ => Error::Io(e),
            })?;
        tokio::io::copy(&mut response.body, &mut file).await?;

        Ok(())
    }
}
