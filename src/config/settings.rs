//! Settings schema and environment resolution.
//!
//! All types here are plain data. Resolution goes through a lookup
//! function seam so tests can supply variables without touching the
//! process environment.

use std::env;

/// Environment variable naming the application.
pub const ENV_APP_NAME: &str = "APP_NAME";

/// Environment variable naming the version string.
pub const ENV_APP_VERSION: &str = "APP_VERSION";

/// Environment variable naming the deployment environment.
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

/// Default application name (default: "My App").
const DEFAULT_APP_NAME: &str = "My App";

/// Default version string (default: "3.1.0").
const DEFAULT_APP_VERSION: &str = "3.1.0";

/// Default environment label (default: "development").
const DEFAULT_ENVIRONMENT: &str = "development";

/// Display settings for the welcome page.
///
/// Immutable after startup; every field is guaranteed non-empty because
/// resolution falls back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Application name shown in the page heading.
    pub app_name: String,

    /// Version string shown on the page.
    pub app_version: String,

    /// Deployment environment label shown on the page.
    pub environment: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve settings from an arbitrary variable lookup.
    ///
    /// A variable that is missing or set to the empty string resolves to
    /// its default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            app_name: resolve(ENV_APP_NAME, DEFAULT_APP_NAME),
            app_version: resolve(ENV_APP_VERSION, DEFAULT_APP_VERSION),
            environment: resolve(ENV_ENVIRONMENT, DEFAULT_ENVIRONMENT),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
