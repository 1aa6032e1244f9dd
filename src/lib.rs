//! # Platebook
//!
//! Server-side renderer for a small restaurant review site. A static JSON
//! document of reviews is rendered into hand-written host pages: a homepage
//! preview grid, a full listing with rating bars, and a photo gallery.
//!
//! ## Modules
//!
//! - [`reviews`]: Review document types and sources
//! - [`render`]: View renderers and formatters
//! - [`page`]: Page classification, host page mounting, contact form
//! - [`server`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platebook::config::Config;
//! use platebook::page::{PageController, Site};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let controller = PageController::from_site_config(&config.site)?;
//!     let site = Site::new(&config.site.root);
//!
//!     let markup = site.read_host_page("reviews.html").await?;
//!     let html = controller.render("/reviews.html", markup, None).await;
//!
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod logging;
pub mod page;
pub mod render;
pub mod reviews;
pub mod server;

pub use reviews::{
    load, FileSource, HttpSource, LoadError, Ratings, ReviewDocument, ReviewId, ReviewRecord,
    ReviewSource, WouldReturn,
};

pub use render::{rating_bar, star_rating, RenderOptions};

pub use page::{
    export_site, Acknowledgment, ContactSubmission, ExportReport, HostPage, MountPoint,
    PageController, PageError, PageKind, Site,
};

pub use server::{build_router, serve, AppState, ServerError};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SiteConfig};
