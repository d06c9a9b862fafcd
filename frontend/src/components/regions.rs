//! The two page regions written by the loader.

use leptos::*;
use printer_table::{FILENAME_ELEMENT_ID, TABLE_ELEMENT_ID};

/// Filename label, written as text.
#[component]
pub fn FilenameLabel(filename: Signal<Option<String>>) -> impl IntoView {
    view! {
        <h2 id=FILENAME_ELEMENT_ID>{move || filename.get().unwrap_or_default()}</h2>
    }
}

/// Table container. The markup replaces whatever the container held.
#[component]
pub fn CsvTable(markup: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div id=TABLE_ELEMENT_ID inner_html=move || markup.get().unwrap_or_default()></div>
    }
}
