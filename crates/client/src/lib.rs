//! kodo-client: Signed transport and operations client for the Kodo
//! resource service
//!
//! This crate provides the concrete side of the binding: the QBox signing
//! credential, the reqwest-backed implementation of the `Rpc` trait from
//! kodo-core, and the one-method-per-operation [`RsClient`]. It is the only
//! crate that depends on an HTTP stack.

pub mod client;
pub mod mac;
pub mod transport;

pub use client::RsClient;
pub use mac::Mac;
pub use transport::QboxRpc;
