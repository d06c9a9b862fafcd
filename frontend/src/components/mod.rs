//! UI Components for the printer listing page.
//!
//! - [`ListingPage`] - loads the listing once and shows both regions
//! - [`FilenameLabel`] - the `filename` region
//! - [`CsvTable`] - the `csvTable` region

mod listing;
mod regions;

pub use listing::*;
pub use regions::*;
