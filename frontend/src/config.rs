//! Page configuration.
//!
//! The listing shown by the page is fixed at build time. Publishing a new
//! month means changing these constants and rebuilding.

use printer_table::RenderOptions;

/// Request path of the listing, relative to the site root.
pub const LISTING_PATH: &str = "/foundprinters/printers_2024-05.csv";

/// Label written into the filename region once the listing has loaded.
pub const LISTING_LABEL: &str = "printers_2024-05.csv";

/// Document title.
pub const PAGE_TITLE: &str = "Printers";

/// Whether a non-2xx response counts as a failed load.
///
/// Off: any response body is rendered as a listing, error pages included.
pub const CHECK_RESPONSE_STATUS: bool = false;

/// How the listing is fetched and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Path passed to the HTTP GET
    pub resource_path: String,
    /// Text for the filename region
    pub label: String,
    /// Reject non-2xx responses
    pub check_status: bool,
    /// Cell rendering options
    pub render: RenderOptions,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resource_path: LISTING_PATH.to_string(),
            label: LISTING_LABEL.to_string(),
            check_status: CHECK_RESPONSE_STATUS,
            render: RenderOptions::default(),
        }
    }
}
