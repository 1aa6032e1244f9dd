//! Review sources
//!
//! A source knows how to fetch and parse the review document. `load` is the
//! only entry point renderers should use: it never fails, it degrades to an
//! empty record list and logs the cause.

use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use super::error::{LoadError, LoadResult};
use super::types::{ReviewDocument, ReviewRecord};

/// Anything that can produce a review document
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Where the document comes from, for logs
    fn describe(&self) -> String;

    /// Fetch and parse the document
    async fn fetch(&self) -> LoadResult<ReviewDocument>;
}

/// Review document on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReviewSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> LoadResult<ReviewDocument> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.describe(),
                source,
            })?;

        Ok(serde_json::from_str(&content)?)
    }
}

/// Review document served over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source with a request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> LoadResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ReviewSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> LoadResult<ReviewDocument> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pick a source for a configured location
///
/// `http://` and `https://` locations are fetched remotely; anything else is a
/// path, resolved against `site_root` when relative.
pub fn source_for(
    location: &str,
    site_root: &Path,
    timeout: Duration,
) -> LoadResult<Arc<dyn ReviewSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(Arc::new(HttpSource::new(location, timeout)?));
    }

    let path = Path::new(location);
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        site_root.join(path)
    };

    Ok(Arc::new(FileSource::new(path)))
}

/// Load every review record, in document order
///
/// Failures are logged and turned into an empty list.
pub async fn load(source: &dyn ReviewSource) -> Vec<ReviewRecord> {
    match source.fetch().await {
        Ok(document) => {
            tracing::debug!(
                source = %source.describe(),
                count = document.reviews.len(),
                "Loaded review document"
            );
            document.reviews
        }
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "Error loading reviews");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tempfile::tempdir;

    const DOCUMENT: &str = r#"{"reviews": [
        {"id": 1, "name": "A", "location": "L", "category": "C", "review": "R",
         "images": [], "ratings": {"overall": 5, "foodQuality": 5, "value": 5, "service": 5, "portionSize": 5},
         "wouldReturn": "No", "date": "2024-01-01"},
        {"id": 2, "name": "B", "location": "L", "category": "C", "review": "R",
         "ratings": {"overall": 9, "foodQuality": 9, "value": 9, "service": 9, "portionSize": 9},
         "wouldReturn": "Yes", "date": "2024-01-02"}
    ]}"#;

    #[tokio::test]
    async fn test_file_source_keeps_document_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reviews.json");
        std::fs::write(&path, DOCUMENT).unwrap();

        let reviews = load(&FileSource::new(&path)).await;
        let names: Vec<&str> = reviews.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.json"));

        assert!(matches!(source.fetch().await, Err(LoadError::Io { .. })));
        assert!(load(&source).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_document_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reviews.json");
        std::fs::write(&path, r#"{"reviews": {"id": 1}}"#).unwrap();
        let source = FileSource::new(&path);

        assert!(matches!(source.fetch().await, Err(LoadError::Parse(_))));
        assert!(load(&source).await.is_empty());
    }

    #[tokio::test]
    async fn test_partially_malformed_document_keeps_valid_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reviews.json");
        let document = DOCUMENT.replace(r#""name": "A", "location": "L", "#, "");
        std::fs::write(&path, document).unwrap();

        let reviews = load(&FileSource::new(&path)).await;
        let names: Vec<&str> = reviews.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B"]);
    }

    async fn serve_document(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/reviews.json", get(move || async move { (status, body) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/reviews.json", addr)
    }

    #[tokio::test]
    async fn test_http_source_fetches_document() {
        let url = serve_document(StatusCode::OK, DOCUMENT).await;
        let source = HttpSource::new(url, Duration::from_secs(5)).unwrap();

        let reviews = load(&source).await;
        assert_eq!(reviews.len(), 2);
    }

    #[tokio::test]
    async fn test_http_source_error_status_loads_empty() {
        let url = serve_document(StatusCode::NOT_FOUND, "missing").await;
        let source = HttpSource::new(url.clone(), Duration::from_secs(5)).unwrap();

        match source.fetch().await {
            Err(LoadError::Status { url: failed, status }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected a status error, got {:?}", other),
        }
        assert!(load(&source).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_http_source_loads_empty() {
        // Port 9 (discard) on localhost is closed in test environments
        let source =
            HttpSource::new("http://127.0.0.1:9/reviews.json", Duration::from_millis(500))
                .unwrap();
        assert!(load(&source).await.is_empty());
    }

    #[test]
    fn test_source_for_resolves_relative_paths() {
        let source = source_for("reviews.json", Path::new("/srv/site"), Duration::from_secs(1))
            .unwrap();
        assert_eq!(source.describe(), Path::new("/srv/site/reviews.json").display().to_string());

        let remote = source_for(
            "https://example.com/reviews.json",
            Path::new("/srv/site"),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(remote.describe(), "https://example.com/reviews.json");
    }
}
