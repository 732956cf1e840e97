//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Contracts shown per list page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the command line front-end.
pub struct AppConfig {
    /// JSON file holding contracts and reference options.
    pub dataset_path: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}
