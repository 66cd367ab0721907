//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (APP_NAME, APP_VERSION, ENVIRONMENT)
//!     → settings.rs (resolve, apply defaults)
//!     → Settings (immutable)
//!     → shared via Arc with the HTTP handlers
//! ```
//!
//! # Design Decisions
//! - Settings are resolved once at startup; handlers never read the
//!   environment per request
//! - Every field has a default, so an empty environment is valid
//! - Empty-string variables count as unset and fall back to the default

pub mod settings;

pub use settings::Settings;
