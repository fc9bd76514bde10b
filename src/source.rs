//! Artifact sources
//!
//! The upstream scan job replaces both artifacts wholesale on each run. We
//! only ever read them: either from a KV namespace it writes into, or from a
//! plain HTTP location such as a public bucket.

use worker::Env;
use worker::kv::KvStore;

use crate::config::{Config, SourceKind};
use crate::error::{DashboardError, Result};

/// Read-only access to raw artifact text by path
#[allow(async_fn_in_trait)] // Workers futures are !Send anyway
pub trait ArtifactSource {
    /// Fetch the full artifact text. A missing artifact is `NotFound`.
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// Artifacts stored in Workers KV, keyed by path
pub struct KvSource {
    store: KvStore,
}

impl KvSource {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }
}

impl ArtifactSource for KvSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.store
            .get(path)
            .text()
            .await?
            .ok_or_else(|| DashboardError::NotFound(format!("kv key '{path}'")))
    }
}

/// Artifacts served over HTTP(S) beneath a base URL
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl ArtifactSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = join_url(&self.base_url, path);
        let response = self.client.get(&url).send().await?;
        check_status(response.status(), &url)?;
        response.text().await.map_err(DashboardError::from)
    }
}

/// 404 means the artifact is missing; any other failure status is an HTTP error
fn check_status(status: reqwest::StatusCode, url: &str) -> Result<()> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(DashboardError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(DashboardError::Http(format!("HTTP {status} fetching {url}")));
    }
    Ok(())
}

/// The source selected by configuration
pub enum Source {
    Kv(KvSource),
    Http(HttpSource),
}

impl Source {
    pub fn from_config(env: &Env, config: &Config) -> Result<Self> {
        match config.source {
            SourceKind::Kv => Ok(Source::Kv(KvSource::new(env.kv(&config.kv_binding)?))),
            SourceKind::Http => {
                let base_url = config.base_url.clone().ok_or_else(|| {
                    DashboardError::Config("ARTIFACT_BASE_URL not set".into())
                })?;
                Ok(Source::Http(HttpSource::new(base_url)))
            }
        }
    }
}

impl ArtifactSource for Source {
    async fn fetch(&self, path: &str) -> Result<String> {
        match self {
            Source::Kv(kv) => kv.fetch(path).await,
            Source::Http(http) => http.fetch(path).await,
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// In-memory artifacts for tests
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemorySource {
    files: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemorySource {
    pub(crate) fn with(mut self, path: &str, text: &str) -> Self {
        self.files.insert(path.to_string(), text.to_string());
        self
    }
}

#[cfg(test)]
impl ArtifactSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound(path.to_string()))
    }
}
