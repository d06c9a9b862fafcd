//! Common types used across the page.
//!
//! # Categories
//!
//! - **Page Types** - what the two page regions show
//! - **Error Types** - listing load failures

use std::fmt;

// =============================================================================
// Page Types
// =============================================================================

/// Content of the two page regions.
///
/// `None` means the region has not been written. Each region is written at
/// most once per page load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageRegions {
    /// Text of the filename region
    pub filename: Option<String>,
    /// Markup of the table region
    pub table: Option<String>,
}

impl PageRegions {
    /// Both regions written.
    pub fn is_rendered(&self) -> bool {
        self.filename.is_some() && self.table.is_some()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a listing could not be loaded.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadError {
    /// Request never produced a response.
    Network(String),
    /// Response body could not be read as text.
    Body(String),
    /// Non-2xx response, only reported when status checks are on.
    Status(u16),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Body(msg) => write!(f, "Body error: {}", msg),
            LoadError::Status(code) => write!(f, "Server responded with status {}", code),
        }
    }
}

impl std::error::Error for LoadError {}

/// Result type alias for listing loads.
pub type LoadResult<T> = Result<T, LoadError>;
