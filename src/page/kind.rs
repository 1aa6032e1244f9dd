//! Page classification
//!
//! The URL path decides which view, if any, a page hosts.

use super::host::MountPoint;
use crate::render::{render_gallery, render_home, render_reviews, RenderOptions};
use crate::reviews::ReviewRecord;

/// Homepage preview grid
pub const HOME_GRID: MountPoint = MountPoint::Class("reviews-grid");
/// Reviews page container
pub const REVIEWS_CONTAINER: MountPoint = MountPoint::Id("reviewsContainer");
/// Gallery container
pub const GALLERY_GRID: MountPoint = MountPoint::Id("galleryGrid");
/// Contact form
pub const CONTACT_FORM: MountPoint = MountPoint::Id("contactForm");
/// Acknowledgment output next to the contact form
pub const FORM_MESSAGE: MountPoint = MountPoint::Id("formMessage");

/// The view a page hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Reviews,
    Gallery,
}

impl PageKind {
    /// Classify a URL path; first match wins, no match hosts no view
    pub fn classify(path: &str) -> Option<Self> {
        if path.contains("index.html") || path.ends_with('/') {
            Some(PageKind::Home)
        } else if path.contains("reviews.html") {
            Some(PageKind::Reviews)
        } else if path.contains("gallery.html") {
            Some(PageKind::Gallery)
        } else {
            None
        }
    }

    /// Where this view's markup goes
    pub fn mount_point(&self) -> MountPoint {
        match self {
            PageKind::Home => HOME_GRID,
            PageKind::Reviews => REVIEWS_CONTAINER,
            PageKind::Gallery => GALLERY_GRID,
        }
    }

    /// Render this view's markup
    pub fn render(&self, reviews: &[ReviewRecord], options: &RenderOptions) -> String {
        match self {
            PageKind::Home => render_home(reviews, options),
            PageKind::Reviews => render_reviews(reviews),
            PageKind::Gallery => render_gallery(reviews),
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageKind::Home => write!(f, "home"),
            PageKind::Reviews => write!(f, "reviews"),
            PageKind::Gallery => write!(f, "gallery"),
        }
    }
}

/// File name of the current page: last path segment, `index.html` if empty
pub fn current_page(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "index.html",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(PageKind::classify("/"), Some(PageKind::Home));
        assert_eq!(PageKind::classify("/index.html"), Some(PageKind::Home));
        assert_eq!(PageKind::classify("/food/"), Some(PageKind::Home));
        assert_eq!(PageKind::classify("/reviews.html"), Some(PageKind::Reviews));
        assert_eq!(PageKind::classify("/gallery.html"), Some(PageKind::Gallery));
        assert_eq!(PageKind::classify("/contact.html"), None);
        assert_eq!(PageKind::classify(""), None);
    }

    #[test]
    fn test_classify_first_match_wins() {
        assert_eq!(
            PageKind::classify("/index.html/reviews.html"),
            Some(PageKind::Home)
        );
        assert_eq!(
            PageKind::classify("/reviews.html/gallery.html"),
            Some(PageKind::Reviews)
        );
    }

    #[test]
    fn test_mount_points() {
        assert_eq!(PageKind::Home.mount_point(), MountPoint::Class("reviews-grid"));
        assert_eq!(PageKind::Reviews.mount_point(), MountPoint::Id("reviewsContainer"));
        assert_eq!(PageKind::Gallery.mount_point(), MountPoint::Id("galleryGrid"));
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/gallery.html"), "gallery.html");
        assert_eq!(current_page("/site/contact.html?sent=1"), "contact.html");
        assert_eq!(current_page("/food/"), "index.html");
    }
}
