//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, root route, trace layer)
//!     → render.rs (settings → HTML document)
//!     → Send to client
//!
//! Any other path falls through to Axum's default 404.
//! ```

pub mod render;
pub mod server;

pub use server::HttpServer;
