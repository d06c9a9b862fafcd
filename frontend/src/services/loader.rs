//! Listing loader: one GET, then one render.
//!
//! The page issues exactly one request per load. There is no retry, cache or
//! timeout; a request that never settles leaves the page empty.
//!
//! A failed load is reported to the browser console and nothing is shown on
//! the page. The response status is ignored unless
//! [`LoaderConfig::check_status`] is set, so an error page body renders as a
//! one-column table.

use gloo_net::http::Request;
use printer_table::render_csv;

use crate::config::LoaderConfig;
use crate::types::{LoadError, LoadResult, PageRegions};

/// Something that can produce the listing text for a path.
#[allow(async_fn_in_trait)]
pub trait ListingSource {
    async fn fetch_text(&self, path: &str, check_status: bool) -> LoadResult<String>;
}

/// Fetches the listing over HTTP from the page's origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl ListingSource for HttpSource {
    async fn fetch_text(&self, path: &str, check_status: bool) -> LoadResult<String> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if check_status && !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Body(e.to_string()))
    }
}

/// Turn a load outcome into region contents.
///
/// Success fills both regions; failure leaves both empty.
pub fn regions_from(result: LoadResult<String>, config: &LoaderConfig) -> PageRegions {
    match result {
        Ok(text) => {
            let table = render_csv(&text, &config.render);
            log::info!("📄 Loaded {} ({} bytes)", config.label, text.len());
            PageRegions {
                filename: Some(config.label.clone()),
                table: Some(table),
            }
        }
        Err(e) => {
            log::error!("❌ Failed to load {}: {}", config.resource_path, e);
            PageRegions::default()
        }
    }
}

/// Fetch the configured listing once and build the region contents.
pub async fn load_listing<S: ListingSource>(source: &S, config: &LoaderConfig) -> PageRegions {
    log::debug!("Fetching {}", config.resource_path);
    let result = source
        .fetch_text(&config.resource_path, config.check_status)
        .await;
    regions_from(result, config)
}
