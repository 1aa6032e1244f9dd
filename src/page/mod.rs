//! Page controller and host pages
//!
//! - **kind**: URL path → `PageKind`, mount point constants
//! - **host**: Host page scanning, mounting and nav highlighting
//! - **contact**: Contact form submissions and their acknowledgment
//! - **controller**: One-shot rendering of a host page
//! - **site**: Host page lookup in the site root
//! - **export**: Static rendering of the whole site
//! - **error**: Error types

pub mod contact;
pub mod controller;
pub mod error;
pub mod export;
pub mod host;
pub mod kind;
pub mod site;

pub use contact::{has_contact_form, Acknowledgment, ContactSubmission};
pub use controller::PageController;
pub use error::{PageError, PageResult};
pub use export::{copy_assets, export_site, ExportReport};
pub use host::{HostPage, MountPoint};
pub use kind::{
    current_page, PageKind, CONTACT_FORM, FORM_MESSAGE, GALLERY_GRID, HOME_GRID,
    REVIEWS_CONTAINER,
};
pub use site::Site;
