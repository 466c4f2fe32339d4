//! kodo-core: Core library for the kodo-rs resource-service client
//!
//! This crate provides the parts of the client that are independent of any
//! HTTP implementation:
//! - Resource identity encoding and request path construction
//! - The data model returned by the service
//! - Client configuration
//! - The `Rpc` transport capability implemented by kodo-client
//!
//! Keeping these separate from the transport lets path construction be
//! tested as pure functions and the operations client be driven by mock
//! transports.

pub mod config;
pub mod entry;
pub mod error;
pub mod model;
pub mod rpc;
pub mod uri;

pub use config::{DEFAULT_RS_HOST, RsConfig};
pub use entry::{EntryPath, encode_segment};
pub use error::{Error, Result};
pub use model::{Entry, FetchResult};
pub use rpc::{RawResponse, Rpc};
pub use uri::RsOp;
