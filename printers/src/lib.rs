//! # Printer Table - monthly printer listings as linked HTML tables
//!
//! A printer listing is a plain CSV file (`printers_YYYY-MM.csv`) with one
//! printer per line. This crate splits such a listing into rows and cells and
//! renders it as an HTML table where every cell holding an IPv4 address links
//! to that printer's web interface.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ RawDocument │────▶│   Parser    │────▶│  Renderer   │────▶│ <table> HTML│
//! │   (text)    │     │ (\n then ,) │     │ (+ IPv4 ✓)  │     │  fragment   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The same core runs in the browser (see the `printer-table-frontend`
//! crate) and in the `printer-table` command-line renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use printer_table::{render_csv, RenderOptions};
//!
//! let html = render_csv("ip,model\n10.0.0.5,bizhub", &RenderOptions::default());
//! assert!(html.contains(r#"<a href="http://10.0.0.5" target="_blank">10.0.0.5</a>"#));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Table, Row, Cell
//! - [`parser`] - Line/comma splitting and byte decoding
//! - [`validation`] - IPv4 cell detection
//! - [`render`] - HTML table and page rendering
//! - [`naming`] - Monthly listing file names

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Rendering
pub mod render;

// File naming
pub mod naming;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, ConfigResult, CsvError, CsvResult, PageError, PageResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Cell, Row, Table};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_auto,
    decode_content,
    detect_encoding,
    parse_bytes_auto,
    parse_listing_file,
    read_listing,
    split_row,
    split_table,
    ParseResult,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::is_valid_ip;

// =============================================================================
// Re-exports - Rendering
// =============================================================================

pub use render::{
    escape_html,
    render_cell,
    render_csv,
    render_page,
    render_table,
    CellEscaping,
    RenderOptions,
    FILENAME_ELEMENT_ID,
    LINK_SCHEME,
    TABLE_ELEMENT_ID,
};

// =============================================================================
// Re-exports - Naming
// =============================================================================

pub use naming::{
    listing_date,
    listing_path,
    monthly_file_name,
    parse_month,
    parse_offset,
    resource_path,
    FOUNDPRINTERS_DIR,
};
