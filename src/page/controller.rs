//! Page controller
//!
//! Renders one host page: the view chosen by the URL path, the contact
//! acknowledgment, and the active nav link. Each concern is independent and
//! runs once per render.
//!
//! ```text
//! path ──► PageKind ──► load() ──► view ──► mount point
//!      └─► contact form (if submitted) ──► #formMessage
//!      └─► current page ──► nav a.active
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::contact::{has_contact_form, Acknowledgment, ContactSubmission};
use super::host::HostPage;
use super::kind::{current_page, PageKind, FORM_MESSAGE};
use crate::config::SiteConfig;
use crate::render::RenderOptions;
use crate::reviews::{load, source_for, LoadResult, ReviewSource};

/// Fills host pages for incoming paths
#[derive(Clone)]
pub struct PageController {
    source: Arc<dyn ReviewSource>,
    options: RenderOptions,
    ack_dismiss: Duration,
}

impl PageController {
    pub fn new(source: Arc<dyn ReviewSource>, options: RenderOptions, ack_dismiss: Duration) -> Self {
        Self {
            source,
            options,
            ack_dismiss,
        }
    }

    /// Build a controller from the `[site]` configuration
    pub fn from_site_config(site: &SiteConfig) -> LoadResult<Self> {
        let source = source_for(
            &site.reviews,
            Path::new(&site.root),
            Duration::from_secs(site.fetch_timeout_secs),
        )?;

        Ok(Self::new(
            source,
            RenderOptions::from(site),
            Duration::from_secs(site.ack_dismiss_secs),
        ))
    }

    pub fn source(&self) -> &dyn ReviewSource {
        self.source.as_ref()
    }

    /// Render `markup` as the page served at `path`
    pub async fn render(
        &self,
        path: &str,
        markup: String,
        submission: Option<&ContactSubmission>,
    ) -> String {
        let mut page = HostPage::new(markup);

        if let Some(kind) = PageKind::classify(path) {
            self.mount_view(&mut page, kind).await;
        }

        if let Some(submission) = submission {
            self.acknowledge(&mut page, submission);
        }

        let current = current_page(path);
        let marked = page.highlight_nav(current);
        tracing::trace!(page = %current, marked, "Highlighted navigation");

        page.into_markup()
    }

    async fn mount_view(&self, page: &mut HostPage, kind: PageKind) {
        let mount = kind.mount_point();
        if !page.contains(mount) {
            tracing::debug!(view = %kind, mount = %mount, "Mount point missing, skipping view");
            return;
        }

        let reviews = load(self.source.as_ref()).await;
        let content = kind.render(&reviews, &self.options);
        page.fill(mount, &content);

        tracing::debug!(view = %kind, records = reviews.len(), "Rendered view");
    }

    fn acknowledge(&self, page: &mut HostPage, submission: &ContactSubmission) {
        if !has_contact_form(page) {
            tracing::debug!("Submission for a page without a contact form, ignoring");
            return;
        }

        let ack = Acknowledgment::for_submission(submission, self.ack_dismiss);
        if page.fill(FORM_MESSAGE, &ack.render()) {
            tracing::info!(
                name = %submission.name.trim(),
                message_chars = submission.message_chars(),
                "Acknowledged contact submission"
            );
        } else {
            tracing::warn!(mount = %FORM_MESSAGE, "Contact form has no message element");
        }
    }
}
