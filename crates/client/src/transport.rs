//! Signed reqwest transport
//!
//! [`QboxRpc`] is the concrete `Rpc` implementation: one reqwest client with
//! QBox signing applied to every outgoing request. An optional remote-IP
//! binding rewrites the request host while carrying the original host in the
//! `Host` header.

use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use tokio_util::io::StreamReader;
use url::Url;

use kodo_core::{Error, RawResponse, Result, Rpc};

use crate::mac::Mac;

/// Content type of the (empty) call bodies
const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// Signing transport over a reqwest client.
pub struct QboxRpc {
    http: reqwest::Client,
    mac: Mac,
    bind_remote_ip: Option<String>,
}

impl QboxRpc {
    /// Transport over a default HTTP client
    pub fn new(mac: Mac) -> Self {
        Self::with_http(mac, reqwest::Client::new(), None)
    }

    /// Transport over a caller-supplied HTTP client, optionally binding
    /// requests to a fixed remote IP
    pub fn with_http(mac: Mac, http: reqwest::Client, bind_remote_ip: Option<String>) -> Self {
        Self {
            http,
            mac,
            bind_remote_ip,
        }
    }

    /// Parse `raw` and apply the remote-IP binding when configured.
    ///
    /// Returns the request URL plus the `Host` header value to carry when
    /// the URL's host was rewritten.
    fn prepare(&self, raw: &str) -> Result<(Url, Option<String>)> {
        let mut url = Url::parse(raw)?;
        let Some(ip) = &self.bind_remote_ip else {
            return Ok((url, None));
        };
        let original_host = url.host_str().map(str::to_owned);
        url.set_host(Some(ip))?;
        Ok((url, original_host))
    }
}

#[async_trait]
impl Rpc for QboxRpc {
    async fn call(&self, url: &str) -> Result<Bytes> {
        let (url, host) = self.prepare(url)?;
        let token = self.mac.sign_request(&url);
        tracing::debug!(%url, "resource-service call");

        let mut request = self
            .http
            .post(url)
            .header(AUTHORIZATION, token)
            .header(CONTENT_TYPE, FORM_MIME);
        if let Some(host) = host {
            request = request.header(HOST, host);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "call rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        let (url, host) = self.prepare(url)?;
        let token = self.mac.sign_request(&url);
        tracing::debug!(%url, "raw fetch");

        let mut request = self.http.get(url).header(AUTHORIZATION, token);
        if let Some(host) = host {
            request = request.header(HOST, host);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let stream = response.bytes_stream().map_err(std::io::Error::other);

        Ok(RawResponse {
            status,
            body: Box::new(StreamReader::new(stream)),
        })
    }
}

/// Extract the service's error message from a rejection body.
///
/// The service reports errors as `{"error": "..."}`; anything else is
/// carried through as text.
fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body)
        && let Some(message) = value.get("error").and_then(|v| v.as_str())
    {
        return message.to_owned();
    }
    String::from_utf8_lossy(body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(error_message(br#"{"error":"file exists"}"#), "file exists");
    }

    #[test]
    fn test_error_message_falls_back_to_text() {
        assert_eq!(error_message(b"bad gateway"), "bad gateway");
        assert_eq!(error_message(br#"{"code":614}"#), r#"{"code":614}"#);
    }

    #[test]
    fn test_prepare_without_binding_keeps_url() {
        let rpc = QboxRpc::new(Mac::new("ak", "sk"));
        let (url, host) = rpc.prepare("http://rs.qiniu.com/stat/Yjpr").unwrap();
        assert_eq!(url.as_str(), "http://rs.qiniu.com/stat/Yjpr");
        assert_eq!(host, None);
    }

    #[test]
    fn test_prepare_rewrites_host_when_bound() {
        let rpc = QboxRpc::with_http(
            Mac::new("ak", "sk"),
            reqwest::Client::new(),
            Some("10.0.0.1".into()),
        );
        let (url, host) = rpc.prepare("http://rs.qiniu.com/stat/Yjpr").unwrap();
        assert_eq!(url.host_str(), Some("10.0.0.1"));
        assert_eq!(url.path(), "/stat/Yjpr");
        assert_eq!(host.as_deref(), Some("rs.qiniu.com"));
    }

    #[test]
    fn test_prepare_rejects_invalid_url() {
        let rpc = QboxRpc::new(Mac::new("ak", "sk"));
        assert!(rpc.prepare("not a url").is_err());
    }
}
