//! Listing page: one fetch on mount, then both regions.

use leptos::*;

use crate::components::{CsvTable, FilenameLabel};
use crate::config::LoaderConfig;
use crate::services::{load_listing, HttpSource};
use crate::types::PageRegions;

#[component]
pub fn ListingPage() -> impl IntoView {
    let (regions, set_regions) = create_signal(PageRegions::default());

    // Runs once per mount, which is once per page load.
    spawn_local(async move {
        let config = LoaderConfig::default();
        let loaded = load_listing(&HttpSource, &config).await;
        set_regions.set(loaded);
    });

    let filename = Signal::derive(move || regions.with(|r| r.filename.clone()));
    let markup = Signal::derive(move || regions.with(|r| r.table.clone()));

    view! {
        <FilenameLabel filename=filename/>
        <CsvTable markup=markup/>
    }
}
