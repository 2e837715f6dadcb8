//! Project configuration for readygo.
//! Holds every scaffold parameter with its default, derives the sample-entity names
//! and validates the result before anything touches the filesystem.

use crate::constants::{
    DEFAULT_APP_PORT, DEFAULT_GO_VERSION, DEFAULT_KAFKA_PORT, DEFAULT_KAFKA_UI_PORT,
    DEFAULT_KAFKA_UI_VERSION, DEFAULT_KAFKA_VERSION, DEFAULT_MODULE_PREFIX,
    DEFAULT_MYSQL_PORT, DEFAULT_MYSQL_VERSION, DEFAULT_OUTPUT_DIR, DEFAULT_REDIS_PORT,
    DEFAULT_REDIS_VERSION, DEFAULT_SAMPLE_API, PROJECT_NAME_PATTERN, SAMPLE_API_NAME_PATTERN,
};
use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All parameters of a single generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub module_name: String,
    pub description: String,
    pub author: String,
    pub go_version: String,

    #[serde(skip)]
    pub output_dir: PathBuf,

    pub with_redis: bool,
    pub with_kafka: bool,

    /// Singular, title-cased entity name, e.g. "User".
    pub sample_api_name: String,
    sample_api_name_lower: String,
    sample_table_name: String,

    pub mysql_version: String,
    pub redis_version: String,
    pub kafka_version: String,
    pub kafka_ui_version: String,

    pub app_port: u16,
    pub mysql_port: u16,
    pub redis_port: u16,
    pub kafka_port: u16,
    pub kafka_ui_port: u16,

    pub skip_git: bool,
}

/// Partial set of caller-supplied values layered on top of the defaults.
///
/// Used for command-line flags, interactive answers and answer files alike.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub module_name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub go_version: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub with_redis: Option<bool>,
    pub with_kafka: Option<bool>,
    pub sample_api_name: Option<String>,
    pub mysql_version: Option<String>,
    pub redis_version: Option<String>,
    pub kafka_version: Option<String>,
    pub kafka_ui_version: Option<String>,
    pub app_port: Option<u16>,
    pub mysql_port: Option<u16>,
    pub redis_port: Option<u16>,
    pub kafka_port: Option<u16>,
    pub kafka_ui_port: Option<u16>,
    pub skip_git: Option<bool>,
}

impl ProjectConfig {
    /// Creates a configuration with every field set to its default.
    pub fn new<S: Into<String>>(project_name: S) -> Self {
        let project_name = project_name.into();
        Self {
            module_name: format!("{DEFAULT_MODULE_PREFIX}/{project_name}"),
            description: format!("A {project_name} service"),
            author: String::new(),
            go_version: DEFAULT_GO_VERSION.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            with_redis: true,
            with_kafka: true,
            sample_api_name: DEFAULT_SAMPLE_API.to_string(),
            sample_api_name_lower: String::new(),
            sample_table_name: String::new(),
            mysql_version: DEFAULT_MYSQL_VERSION.to_string(),
            redis_version: DEFAULT_REDIS_VERSION.to_string(),
            kafka_version: DEFAULT_KAFKA_VERSION.to_string(),
            kafka_ui_version: DEFAULT_KAFKA_UI_VERSION.to_string(),
            app_port: DEFAULT_APP_PORT,
            mysql_port: DEFAULT_MYSQL_PORT,
            redis_port: DEFAULT_REDIS_PORT,
            kafka_port: DEFAULT_KAFKA_PORT,
            kafka_ui_port: DEFAULT_KAFKA_UI_PORT,
            skip_git: false,
            project_name,
        }
    }

    /// Layers the given overrides on top of the current values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        fn set<T>(field: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *field = value;
            }
        }

        set(&mut self.module_name, overrides.module_name);
        set(&mut self.description, overrides.description);
        set(&mut self.author, overrides.author);
        set(&mut self.go_version, overrides.go_version);
        set(&mut self.output_dir, overrides.output_dir);
        set(&mut self.with_redis, overrides.with_redis);
        set(&mut self.with_kafka, overrides.with_kafka);
        set(&mut self.sample_api_name, overrides.sample_api_name);
        set(&mut self.mysql_version, overrides.mysql_version);
        set(&mut self.redis_version, overrides.redis_version);
        set(&mut self.kafka_version, overrides.kafka_version);
        set(&mut self.kafka_ui_version, overrides.kafka_ui_version);
        set(&mut self.app_port, overrides.app_port);
        set(&mut self.mysql_port, overrides.mysql_port);
        set(&mut self.redis_port, overrides.redis_port);
        set(&mut self.kafka_port, overrides.kafka_port);
        set(&mut self.kafka_ui_port, overrides.kafka_ui_port);
        set(&mut self.skip_git, overrides.skip_git);
    }

    /// Recomputes the sample-entity naming triple from `sample_api_name`.
    ///
    /// Running it more than once yields the same result.
    pub fn process(&mut self) {
        self.sample_api_name = title_case(&self.sample_api_name);
        self.sample_api_name_lower = self.sample_api_name.to_lowercase();
        self.sample_table_name = pluralize(&self.sample_api_name_lower);
        debug!(
            "Sample entity '{}' ('{}', table '{}').",
            self.sample_api_name, self.sample_api_name_lower, self.sample_table_name
        );
    }

    /// Checks the configuration and returns the first failing condition.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the project name is empty or contains characters
    ///   other than letters, digits, `-` and `_`
    /// * `Error::ValidationError` if the module name is empty
    /// * `Error::ValidationError` if the sample API name is empty, is not an identifier,
    ///   or its derived names are stale because [`ProjectConfig::process`] did not run
    pub fn validate(&self) -> Result<()> {
        if self.project_name.is_empty() {
            return Err(Error::ValidationError("project name cannot be empty".into()));
        }

        let pattern = Regex::new(PROJECT_NAME_PATTERN)
            .map_err(|e| Error::ValidationError(e.to_string()))?;
        if !pattern.is_match(&self.project_name) {
            return Err(Error::ValidationError(format!(
                "project name '{}' can only contain letters, numbers, hyphens, and underscores",
                self.project_name
            )));
        }

        if self.module_name.is_empty() {
            return Err(Error::ValidationError("module name cannot be empty".into()));
        }

        if self.sample_api_name.is_empty() {
            return Err(Error::ValidationError("sample API name cannot be empty".into()));
        }

        let pattern = Regex::new(SAMPLE_API_NAME_PATTERN)
            .map_err(|e| Error::ValidationError(e.to_string()))?;
        if !pattern.is_match(&self.sample_api_name) {
            return Err(Error::ValidationError(format!(
                "sample API name '{}' must start with a letter and contain only letters, \
                 numbers, and underscores",
                self.sample_api_name
            )));
        }

        if self.sample_api_name_lower != self.sample_api_name.to_lowercase()
            || self.sample_table_name != pluralize(&self.sample_api_name_lower)
        {
            return Err(Error::ValidationError(format!(
                "derived names of sample API '{}' are out of date, \
                 process the configuration first",
                self.sample_api_name
            )));
        }

        Ok(())
    }

    pub fn sample_api_name_lower(&self) -> &str {
        &self.sample_api_name_lower
    }

    pub fn sample_table_name(&self) -> &str {
        &self.sample_table_name
    }

    /// Directory the project is generated into.
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }

    pub fn container_name(&self, service: &str) -> String {
        format!("{}-{}", self.project_name, service)
    }

    pub fn network_name(&self) -> String {
        format!("{}-network", self.project_name)
    }

    pub fn volume_name(&self, service: &str) -> String {
        format!("{}-{}-data", self.project_name, service)
    }

    /// Builds the context that templates are evaluated against.
    ///
    /// Contains every serialized field plus the derived container, network and
    /// volume names. The output directory is not part of it.
    ///
    /// # Errors
    /// * `Error::ContextError` if the configuration cannot be serialized
    pub fn template_context(&self) -> Result<serde_json::Value> {
        let value =
            serde_json::to_value(self).map_err(|e| Error::ContextError(e.to_string()))?;
        let mut context = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(Error::ContextError(format!(
                    "expected an object, got '{other}'"
                )))
            }
        };

        let derived = [
            ("network_name", self.network_name()),
            ("app_container", self.container_name("app")),
            ("mysql_container", self.container_name("mysql")),
            ("redis_container", self.container_name("redis")),
            ("kafka_container", self.container_name("kafka")),
            ("kafka_ui_container", self.container_name("kafka-ui")),
            ("mysql_volume", self.volume_name("mysql")),
            ("redis_volume", self.volume_name("redis")),
            ("kafka_volume", self.volume_name("kafka")),
        ];
        for (key, value) in derived {
            context.insert(key.to_string(), serde_json::Value::String(value));
        }

        Ok(serde_json::Value::Object(context))
    }
}

/// Upper-cases the first letter of every word.
///
/// A word starts at the beginning of the input or after any character that is not a
/// letter, digit or underscore. Other characters are left untouched.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut word_start = true;
    for c in input.chars() {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        word_start = !(c.is_alphanumeric() || c == '_');
    }
    result
}

/// Turns a lower-case singular noun into its plural.
///
/// This is a heuristic, not an English pluralization engine: "person" becomes
/// "persons" and "day" becomes "daies".
pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if ["s", "x", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{word}es");
    }
    format!("{word}s")
}
