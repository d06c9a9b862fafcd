//! Printer Table - Leptos WebAssembly page
//!
//! Fetches this month's printer listing once the page is ready and shows it
//! as a table, with every IPv4 cell linking to the printer's web interface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ListingPage (one GET on mount)                              │
//! │  ├── FilenameLabel  (#filename)                              │
//! │  └── CsvTable       (#csvTable)                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Fixed listing path and label
//! - [`types`] - Page regions and load errors
//! - [`components`] - UI components
//! - [`services`] - Listing loader

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{LoadError, LoadResult, PageRegions};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point, runs once the module is instantiated on a parsed page.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🖨️ Printer Table - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/*any" view=ListingPage/>
                </Routes>
            </main>
        </Router>
    }
}
