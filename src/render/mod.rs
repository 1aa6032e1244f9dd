//! View renderers
//!
//! Each view turns the loaded records into the markup for its mount point:
//!
//! - **home**: preview cards for the homepage grid
//! - **detail**: full listing with rating bars
//! - **gallery**: flattened image tiles
//! - **format**: star strings, rating bars, dates, escaping

pub mod detail;
pub mod format;
pub mod gallery;
pub mod home;

pub use detail::render_reviews;
pub use format::{clamp_rating, escape_html, long_date, rating_bar, star_rating, RATING_SCALE};
pub use gallery::render_gallery;
pub use home::render_home;

use crate::config::SiteConfig;

/// Knobs shared by the views
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Card image used when a record has no images
    pub placeholder_image: String,
    /// Page holding the detail blocks, target of homepage links
    pub detail_page: String,
    /// Number of cards on the homepage
    pub home_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder_image: "images/placeholder.jpg".to_string(),
            detail_page: "reviews.html".to_string(),
            home_limit: 3,
        }
    }
}

impl From<&SiteConfig> for RenderOptions {
    fn from(site: &SiteConfig) -> Self {
        Self {
            placeholder_image: site.placeholder_image.clone(),
            detail_page: site.detail_page.clone(),
            home_limit: site.home_limit,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::reviews::{Ratings, ReviewId, ReviewRecord, WouldReturn};

    pub fn record(id: i64, name: &str) -> ReviewRecord {
        ReviewRecord {
            id: ReviewId::Number(id),
            name: name.to_string(),
            location: "Old Town".to_string(),
            category: "Cafe".to_string(),
            review: "Solid lunch spot.".to_string(),
            images: None,
            ratings: Ratings {
                overall: 8,
                food_quality: 8,
                value: 7,
                service: 9,
                portion_size: 6,
            },
            would_return: WouldReturn::Yes,
            date: "2024-05-01".to_string(),
        }
    }
}
