//! Common constants used throughout readygo.

/// Prefix under which templates are addressed in the embedded store.
pub const TEMPLATE_PREFIX: &str = "templates/";

/// Disk locations searched, in order, when a template is not bundled.
/// Each entry is joined with the template identifier.
pub const TEMPLATE_SEARCH_DIRS: [&str; 3] = ["templates", "../../templates", ""];

/// Allowed characters of a project name.
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Shape of a sample entity name. It becomes a Go package and file name.
pub const SAMPLE_API_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]*$";

/// Module path prefix used when no module name is given.
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/username";

pub const DEFAULT_GO_VERSION: &str = "1.23";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_SAMPLE_API: &str = "User";

pub const DEFAULT_MYSQL_VERSION: &str = "8.0";
pub const DEFAULT_REDIS_VERSION: &str = "7-alpine";
pub const DEFAULT_KAFKA_VERSION: &str = "7.6.0";
pub const DEFAULT_KAFKA_UI_VERSION: &str = "latest";

pub const DEFAULT_APP_PORT: u16 = 8080;
pub const DEFAULT_MYSQL_PORT: u16 = 3306;
pub const DEFAULT_REDIS_PORT: u16 = 6379;
pub const DEFAULT_KAFKA_PORT: u16 = 9092;
pub const DEFAULT_KAFKA_UI_PORT: u16 = 8090;

/// Go toolchain binary used for module bootstrap and dependency resolution.
pub const GO_BIN: &str = "go";
