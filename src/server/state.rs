//! Application State
//!
//! Shared, read-only state for all handlers. Nothing here is mutated after
//! startup; each request loads the review document on its own.

use std::time::Instant;

use crate::config::{Config, SiteConfig};
use crate::page::{PageController, Site};
use crate::reviews::LoadResult;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Renders host pages
    pub controller: PageController,
    /// Host pages and assets
    pub site: Site,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(controller: PageController, site: Site) -> Self {
        Self {
            controller,
            site,
            start_time: Instant::now(),
        }
    }

    /// Build state from the `[site]` section
    pub fn from_site_config(site: &SiteConfig) -> LoadResult<Self> {
        Ok(Self::new(
            PageController::from_site_config(site)?,
            Site::new(&site.root),
        ))
    }

    /// Build state from a full configuration
    pub fn from_config(config: &Config) -> LoadResult<Self> {
        Self::from_site_config(&config.site)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
