//! Site root
//!
//! Locates host pages inside the configured site directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{PageError, PageResult};

/// Directory holding host pages and static assets
#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
}

impl Site {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a host page, rejecting anything but a plain `*.html` name
    pub fn host_page_path(&self, name: &str) -> PageResult<PathBuf> {
        let valid = name.ends_with(".html")
            && !name.starts_with('.')
            && !name.contains(['/', '\\'])
            && !name.contains("..");
        if !valid {
            return Err(PageError::NotFound(name.to_string()));
        }
        Ok(self.root.join(name))
    }

    /// Read a host page by file name
    pub async fn read_host_page(&self, name: &str) -> PageResult<String> {
        let path = self.host_page_path(name)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(markup) => Ok(markup),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PageError::NotFound(name.to_string())),
            Err(source) => Err(PageError::Io { path, source }),
        }
    }

    /// File names of every host page, sorted
    pub fn host_pages(&self) -> PageResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| PageError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut pages: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| self.host_page_path(name).is_ok())
            .collect();
        pages.sort();
        Ok(pages)
    }
}
