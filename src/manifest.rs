//! Manifest of a generated project.
//! Computes, without touching the filesystem, which directories are created and which
//! template is rendered to which destination.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::path::{Component, Path, PathBuf};

/// One file of the generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Template identifier, resolved by the template loader.
    pub template: &'static str,
    pub destination: PathBuf,
}

/// Directories and files of one generation run, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<ManifestEntry>,
}

fn join(root: &Path, segments: &[&str]) -> PathBuf {
    segments.iter().fold(root.to_path_buf(), |path, segment| path.join(segment))
}

impl Manifest {
    /// Builds the manifest for a processed and validated configuration.
    ///
    /// # Errors
    /// * `Error::ManifestError` if two files would be written to the same destination
    /// * `Error::ManifestError` if the sample entity name is not a single path segment
    pub fn build(config: &ProjectConfig) -> Result<Self> {
        let root = config.project_root();
        let lower = config.sample_api_name_lower();

        let mut components = Path::new(lower).components();
        if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
            return Err(Error::ManifestError(format!(
                "sample entity name '{lower}' is not a single path segment"
            )));
        }

        let create = format!("create_{lower}");

        let directories = [
            vec![],
            vec!["cmd", "server"],
            vec!["internal", "config"],
            vec!["internal", "database", "migrations"],
            vec!["internal", "database", "query"],
            vec!["internal", "database", "store"],
            vec!["internal", "entity"],
            vec!["internal", "dto", "request"],
            vec!["internal", "dto", "response"],
            vec!["internal", "repository"],
            vec!["internal", "service", lower],
            vec!["internal", "handler", "health"],
            vec!["internal", "handler", lower],
        ]
        .iter()
        .map(|segments| join(&root, segments))
        .collect();

        let entity_file = format!("{lower}.go");
        let query_file = format!("{lower}.sql");
        let request_file = format!("{lower}_request.go");
        let response_file = format!("{lower}_response.go");
        let repository_file = format!("{lower}_repository.go");
        let create_service_file = format!("{create}_service.go");
        let handler_file = format!("{lower}_handler.go");
        let create_handler_file = format!("{create}_handler.go");

        let files: [(&'static str, Vec<&str>); 30] = [
            ("project/main.go.tmpl", vec!["cmd", "server", "main.go"]),
            ("project/Dockerfile.tmpl", vec!["Dockerfile"]),
            ("project/docker-compose.yml.tmpl", vec!["docker-compose.yml"]),
            ("project/Makefile.tmpl", vec!["Makefile"]),
            ("project/config.toml.tmpl", vec!["config.toml"]),
            ("project/.env.docker.tmpl", vec![".env.docker"]),
            ("project/.env.example.tmpl", vec![".env.example"]),
            ("project/.gitignore.tmpl", vec![".gitignore"]),
            ("project/README.md.tmpl", vec!["README.md"]),
            ("internal/application.go.tmpl", vec!["internal", "application.go"]),
            ("internal/config/config.go.tmpl", vec!["internal", "config", "config.go"]),
            ("internal/database/database.go.tmpl", vec!["internal", "database", "database.go"]),
            ("internal/database/sqlc.yaml.tmpl", vec!["internal", "database", "sqlc.yaml"]),
            (
                "internal/database/migrations/migration.sql.tmpl",
                vec!["internal", "database", "migrations", "001_create_initial_schema.sql"],
            ),
            (
                "internal/database/query/sample.sql.tmpl",
                vec!["internal", "database", "query", query_file.as_str()],
            ),
            (
                "internal/database/store/.gitignore.tmpl",
                vec!["internal", "database", "store", ".gitignore"],
            ),
            ("internal/entity/entity.go.tmpl", vec!["internal", "entity", entity_file.as_str()]),
            (
                "internal/dto/request/common.go.tmpl",
                vec!["internal", "dto", "request", "common.go"],
            ),
            (
                "internal/dto/request/sample_request.go.tmpl",
                vec!["internal", "dto", "request", request_file.as_str()],
            ),
            (
                "internal/dto/response/common.go.tmpl",
                vec!["internal", "dto", "response", "common.go"],
            ),
            (
                "internal/dto/response/error_response.go.tmpl",
                vec!["internal", "dto", "response", "error_response.go"],
            ),
            (
                "internal/dto/response/sample_response.go.tmpl",
                vec!["internal", "dto", "response", response_file.as_str()],
            ),
            (
                "internal/repository/interfaces.go.tmpl",
                vec!["internal", "repository", "interfaces.go"],
            ),
            (
                "internal/repository/sample_repository.go.tmpl",
                vec!["internal", "repository", repository_file.as_str()],
            ),
            (
                "internal/service/sample/sample.go.tmpl",
                vec!["internal", "service", lower, entity_file.as_str()],
            ),
            (
                "internal/service/sample/create_sample_service.go.tmpl",
                vec!["internal", "service", lower, create_service_file.as_str()],
            ),
            (
                "internal/handler/health/health_handler.go.tmpl",
                vec!["internal", "handler", "health", "health_handler.go"],
            ),
            ("internal/handler/middleware.go.tmpl", vec!["internal", "handler", "middleware.go"]),
            (
                "internal/handler/sample/sample_handler.go.tmpl",
                vec!["internal", "handler", lower, handler_file.as_str()],
            ),
            (
                "internal/handler/sample/create_sample_handler.go.tmpl",
                vec!["internal", "handler", lower, create_handler_file.as_str()],
            ),
        ];

        let mut destinations: IndexMap<PathBuf, &'static str> = IndexMap::new();
        for (template, segments) in files {
            let destination = join(&root, &segments);
            if let Some(previous) = destinations.insert(destination.clone(), template) {
                return Err(Error::ManifestError(format!(
                    "templates '{}' and '{}' both target '{}'",
                    previous,
                    template,
                    destination.display()
                )));
            }
        }

        let files = destinations
            .into_iter()
            .map(|(destination, template)| ManifestEntry { template, destination })
            .collect();

        Ok(Self { root, directories, files })
    }

    /// Template identifiers referenced by this manifest, in render order.
    pub fn templates(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().map(|entry| entry.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedded::BUNDLED_TEMPLATES;

    fn processed(name: &str, sample: &str) -> ProjectConfig {
        let mut config = ProjectConfig::new(name);
        config.output_dir = PathBuf::from("/work");
        config.sample_api_name = sample.to_string();
        config.process();
        config
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = processed("shop", "product");
        assert_eq!(Manifest::build(&config).unwrap(), Manifest::build(&config).unwrap());
    }

    #[test]
    fn test_directories_start_at_project_root() {
        let manifest = Manifest::build(&processed("shop", "product")).unwrap();
        assert_eq!(manifest.root, PathBuf::from("/work/shop"));
        assert_eq!(manifest.directories[0], PathBuf::from("/work/shop"));
        assert!(manifest
            .directories
            .contains(&PathBuf::from("/work/shop/internal/handler/product")));
        assert!(manifest.directories.iter().all(|dir| dir.starts_with(&manifest.root)));
    }

    #[test]
    fn test_entity_destinations() {
        let manifest = Manifest::build(&processed("shop", "category")).unwrap();
        let destinations: Vec<_> =
            manifest.files.iter().map(|entry| entry.destination.clone()).collect();

        for expected in [
            "/work/shop/internal/entity/category.go",
            "/work/shop/internal/database/query/category.sql",
            "/work/shop/internal/dto/request/category_request.go",
            "/work/shop/internal/dto/response/category_response.go",
            "/work/shop/internal/repository/category_repository.go",
            "/work/shop/internal/service/category/category.go",
            "/work/shop/internal/service/category/create_category_service.go",
            "/work/shop/internal/handler/category/category_handler.go",
            "/work/shop/internal/handler/category/create_category_handler.go",
        ] {
            assert!(destinations.contains(&PathBuf::from(expected)), "missing {expected}");
        }
    }

    #[test]
    fn test_every_template_is_bundled() {
        let manifest = Manifest::build(&processed("shop", "user")).unwrap();
        assert_eq!(manifest.files.len(), BUNDLED_TEMPLATES.len());
        for template in manifest.templates() {
            assert!(BUNDLED_TEMPLATES.iter().any(|(id, _)| *id == template), "{template}");
        }
    }

    #[test]
    fn test_destination_collision_is_rejected() {
        match Manifest::build(&processed("shop", "health")) {
            Err(Error::ManifestError(msg)) => assert!(msg.contains("health_handler.go")),
            other => panic!("Expected ManifestError, got {other:?}"),
        }
    }

    #[test]
    fn test_entity_name_must_stay_inside_root() {
        for sample in ["../../escape", "order/item", ".."] {
            match Manifest::build(&processed("shop", sample)) {
                Err(Error::ManifestError(msg)) => assert!(msg.contains("single path segment")),
                other => panic!("Expected ManifestError for '{sample}', got {other:?}"),
            }
        }

        let unprocessed = ProjectConfig::new("shop");
        assert!(Manifest::build(&unprocessed).is_err());
    }

    #[test]
    fn test_every_file_lives_in_a_manifest_directory() {
        let manifest = Manifest::build(&processed("shop", "order")).unwrap();
        for entry in &manifest.files {
            let parent = entry.destination.parent().unwrap();
            assert!(
                manifest.directories.iter().any(|dir| dir.starts_with(parent)),
                "{}",
                parent.display()
            );
        }
    }
}
