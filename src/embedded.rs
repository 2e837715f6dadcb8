//! Compile-time embedded templates for project scaffolding.
//!
//! Each entry loads a file from the repository's `templates/` tree via [`include_str!`]
//! and is addressed by `templates/<id>`, where `<id>` is the identifier used in the
//! manifest. A renamed or missing template file fails the build.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::constants::TEMPLATE_PREFIX;

/// Read-only mapping from resource path to template text.
pub trait ResourceStore {
    /// Returns the content stored under `path`, if any.
    fn get(&self, path: &str) -> Option<&str>;
}

macro_rules! bundle {
    ($($id:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!("../templates/", $id)))),*]
    };
}

/// Every template shipped with the binary, keyed by identifier.
pub const BUNDLED_TEMPLATES: &[(&str, &str)] = bundle![
    "project/main.go.tmpl",
    "project/Dockerfile.tmpl",
    "project/docker-compose.yml.tmpl",
    "project/Makefile.tmpl",
    "project/config.toml.tmpl",
    "project/.env.docker.tmpl",
    "project/.env.example.tmpl",
    "project/.gitignore.tmpl",
    "project/README.md.tmpl",
    "internal/application.go.tmpl",
    "internal/config/config.go.tmpl",
    "internal/database/database.go.tmpl",
    "internal/database/sqlc.yaml.tmpl",
    "internal/database/migrations/migration.sql.tmpl",
    "internal/database/query/sample.sql.tmpl",
    "internal/database/store/.gitignore.tmpl",
    "internal/entity/entity.go.tmpl",
    "internal/dto/request/common.go.tmpl",
    "internal/dto/request/sample_request.go.tmpl",
    "internal/dto/response/common.go.tmpl",
    "internal/dto/response/error_response.go.tmpl",
    "internal/dto/response/sample_response.go.tmpl",
    "internal/repository/interfaces.go.tmpl",
    "internal/repository/sample_repository.go.tmpl",
    "internal/service/sample/sample.go.tmpl",
    "internal/service/sample/create_sample_service.go.tmpl",
    "internal/handler/health/health_handler.go.tmpl",
    "internal/handler/middleware.go.tmpl",
    "internal/handler/sample/sample_handler.go.tmpl",
    "internal/handler/sample/create_sample_handler.go.tmpl",
];

/// In-memory resource store.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedStore {
    entries: HashMap<String, Cow<'static, str>>,
}

impl EmbeddedStore {
    /// Creates a store without any resources.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store holding every bundled template.
    pub fn bundled() -> Self {
        let entries = BUNDLED_TEMPLATES
            .iter()
            .map(|(id, content)| (format!("{TEMPLATE_PREFIX}{id}"), Cow::Borrowed(*content)))
            .collect();
        Self { entries }
    }

    /// Adds or replaces the resource stored under `path`.
    pub fn with<P: Into<String>, C: Into<String>>(mut self, path: P, content: C) -> Self {
        self.entries.insert(path.into(), Cow::Owned(content.into()));
        self
    }

    /// Drops the resource stored under `path`.
    pub fn without(mut self, path: &str) -> Self {
        self.entries.remove(path);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceStore for EmbeddedStore {
    fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(|content| content.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_store_uses_template_prefix() {
        let store = EmbeddedStore::bundled();
        assert_eq!(store.len(), BUNDLED_TEMPLATES.len());
        assert!(store.get("templates/project/main.go.tmpl").is_some());
        assert!(store.get("project/main.go.tmpl").is_none());
    }

    #[test]
    fn test_with_and_without() {
        let store = EmbeddedStore::empty().with("templates/a.tmpl", "a");
        assert_eq!(store.get("templates/a.tmpl"), Some("a"));

        let store = store.without("templates/a.tmpl");
        assert!(store.is_empty());
    }
}
