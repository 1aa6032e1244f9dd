//! Static export
//!
//! Renders every host page once, without a submission, and copies the rest of
//! the site root next to them. A contact form posts back to its own page and
//! only the server answers that post, so exported pages carrying one are
//! reported back to the caller.

use std::path::{Path, PathBuf};

use super::contact::has_contact_form;
use super::controller::PageController;
use super::error::{PageError, PageResult};
use super::host::HostPage;
use super::site::Site;

/// Outcome of an export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportReport {
    /// Host pages rendered, sorted
    pub pages: Vec<String>,
    /// Static files copied
    pub assets: usize,
    /// Rendered pages whose contact form needs the server to respond
    pub server_only: Vec<String>,
}

/// Render the whole site into `out`
pub async fn export_site(
    site: &Site,
    controller: &PageController,
    out: &Path,
) -> PageResult<ExportReport> {
    tokio::fs::create_dir_all(out).await.map_err(io_error(out))?;
    let assets = copy_assets(site.root(), out)?;

    let mut report = ExportReport {
        assets,
        ..Default::default()
    };

    for page in site.host_pages()? {
        let markup = site.read_host_page(&page).await?;
        let html = controller.render(&format!("/{}", page), markup, None).await;

        if has_contact_form(&HostPage::new(html.as_str())) {
            tracing::warn!(page = %page, "Exported page has a contact form that needs the server");
            report.server_only.push(page.clone());
        }

        let target = out.join(&page);
        tokio::fs::write(&target, html).await.map_err(io_error(&target))?;
        tracing::debug!(page = %page, "Exported page");
        report.pages.push(page);
    }

    Ok(report)
}

/// Copy everything except top-level host pages; returns the file count
///
/// `out` is skipped when it lives inside `root`.
pub fn copy_assets(root: &Path, out: &Path) -> PageResult<usize> {
    let out_canonical = out.canonicalize().ok();
    copy_dir(root, out, true, out_canonical.as_deref())
}

fn copy_dir(src: &Path, dst: &Path, top: bool, skip: Option<&Path>) -> PageResult<usize> {
    let mut copied = 0;

    for entry in std::fs::read_dir(src).map_err(io_error(src))? {
        let path = entry.map_err(io_error(src))?.path();
        if skip.is_some() && path.canonicalize().ok().as_deref() == skip {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);
        if path.is_dir() {
            std::fs::create_dir_all(&target).map_err(io_error(&target))?;
            copied += copy_dir(&path, &target, false, skip)?;
        } else if !(top && path.extension().is_some_and(|ext| ext == "html")) {
            std::fs::copy(&path, &target).map_err(io_error(&path))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PageError {
    let path = PathBuf::from(path);
    move |source| PageError::Io { path, source }
}
