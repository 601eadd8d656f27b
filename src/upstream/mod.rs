//! Upstream completion API.
//!
//! # Data Flow
//! ```text
//! GenerationRequest (credential, prompt)
//!     → client.rs (headers, MessagesRequest, one POST, bounded by timeout)
//!     → types.rs (error envelope parsing)
//!     → Result<Bytes, UpstreamError>
//! ```
//!
//! # Design Decisions
//! - One reqwest::Client per process, reused for every call
//! - No retries
//! - Success bodies are relayed as received, never re-serialized

pub mod client;
pub mod types;

pub use client::{UpstreamClient, UpstreamError};
