//! Welcome page rendering.
//!
//! Pure functions from settings to markup, so page content is testable
//! without a live server. Values are interpolated verbatim; there is no
//! templating engine and no escaping.

use crate::config::Settings;

/// Render the welcome page for the given settings.
pub fn index_page(settings: &Settings) -> String {
    format!(
        "<html>\n  \
           <body>\n    \
             <h1>Welcome to {}</h1>\n    \
             <p>Version: {}</p>\n    \
             <p>Environment: {}</p>\n  \
           </body>\n\
         </html>\n",
        settings.app_name, settings.app_version, settings.environment
    )
}
