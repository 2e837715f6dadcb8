//! Template loading for readygo.
//! Resolves a template identifier to its text, preferring the embedded store and falling
//! back to a fixed, ordered list of disk locations.

use crate::constants::{TEMPLATE_PREFIX, TEMPLATE_SEARCH_DIRS};
use crate::embedded::{EmbeddedStore, ResourceStore};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Where a resolved template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Embedded resource path
    Embedded(String),
    /// Template file found on disk
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Embedded(path) => write!(f, "embedded: '{path}'"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

/// Resolves template identifiers against an injected resource store and the disk.
pub struct TemplateResolver {
    store: Box<dyn ResourceStore>,
    base_dir: PathBuf,
}

impl TemplateResolver {
    /// Creates a resolver whose disk search is relative to the current directory.
    pub fn new(store: Box<dyn ResourceStore>) -> Self {
        Self { store, base_dir: PathBuf::new() }
    }

    /// Re-roots the disk search at `base_dir`.
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, base_dir: P) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Disk locations tried for `id`, in search order.
    pub fn disk_candidates(&self, id: &str) -> Vec<PathBuf> {
        TEMPLATE_SEARCH_DIRS.iter().map(|dir| self.base_dir.join(dir).join(id)).collect()
    }

    /// Returns the template text together with where it was found.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if neither the store nor any disk candidate yields
    ///   content
    pub fn resolve_with_source(&self, id: &str) -> Result<(String, TemplateSource)> {
        let embedded_path = format!("{TEMPLATE_PREFIX}{id}");
        if let Some(content) = self.store.get(&embedded_path) {
            return Ok((content.to_string(), TemplateSource::Embedded(embedded_path)));
        }

        for candidate in self.disk_candidates(id) {
            match fs::read_to_string(&candidate) {
                Ok(content) => return Ok((content, TemplateSource::FileSystem(candidate))),
                Err(e) => debug!("Template candidate '{}' skipped: {}", candidate.display(), e),
            }
        }

        Err(Error::TemplateNotFound { id: id.to_string() })
    }

    /// Returns the text of the template identified by `id`.
    pub fn resolve(&self, id: &str) -> Result<String> {
        let (content, source) = self.resolve_with_source(id)?;
        debug!("Template '{}' loaded from {}.", id, source);
        Ok(content)
    }
}

impl Default for TemplateResolver {
    fn default() -> Self {
        TemplateResolver::new(Box::new(EmbeddedStore::bundled()))
    }
}
