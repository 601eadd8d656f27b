//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup)
//!     → request ID, trace span, CORS, body limit, timeout
//!     → /api/generate  → generate (upstream relay)
//!     → /health        → health
//!     → / and /{path}  → assets (static files)
//! ```

pub mod server;

pub use server::{AppState, HttpServer, X_REQUEST_ID};
