//! Prompt relay library.

pub mod assets;
pub mod config;
pub mod error;
pub mod generate;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
