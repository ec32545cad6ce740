//! Client side of the APM exchange: loads merchant configuration, signs and serializes
//! outgoing requests, and checks the processor's responses.
//!
//! Transport is left to the caller; the client only produces and consumes XML text.

pub mod client;
pub mod configs;
pub mod error;
pub mod logger;

pub use client::ApmClient;
pub use configs::Config;
