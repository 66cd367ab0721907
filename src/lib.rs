//! Welcome Page Server Library

pub mod config;
pub mod http;

pub use config::Settings;
pub use http::HttpServer;
