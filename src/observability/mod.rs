//! Observability subsystem.
//!
//! Logging only: request spans come from `tower_http::trace::TraceLayer`
//! (with the request ID attached), handlers add structured events on top.

pub mod logging;
