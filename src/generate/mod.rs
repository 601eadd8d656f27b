//! Prompt relay endpoint.
//!
//! # Data Flow
//! ```text
//! POST /api/generate {apiKey, prompt}
//!     → payload.rs (parse, validate → GenerationRequest)
//!     → upstream::UpstreamClient::complete
//!     → handler.rs (map UpstreamError into ApiError, or relay body)
//! ```

pub mod handler;
pub mod payload;

pub use handler::generate;
pub use payload::GenerationRequest;
