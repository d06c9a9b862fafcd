//! Services for reaching outside the page.
//!
//! # Services
//!
//! - [`loader`] - fetch the printer listing and render it

pub mod loader;

pub use loader::*;
