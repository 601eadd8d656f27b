//! Static asset responder.
//!
//! # Responsibilities
//! - Serve the root document for `/`
//! - Serve files under the asset root by path
//! - Never shadow API routes with files
//! - Refuse paths that leave the asset root

pub mod handler;
pub mod resolve;

pub use handler::{api_not_found, serve_asset, serve_index};
pub use resolve::AssetRoot;
