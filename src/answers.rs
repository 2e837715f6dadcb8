//! Pre-supplied answers for non-interactive runs.
//! Answers are a JSON or YAML mapping of configuration fields, read from a file or stdin.

use crate::config::ConfigOverrides;
use crate::error::{Error, Result};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where pre-supplied answers are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    Stdin,
    File(PathBuf),
    None,
}

impl AnswerSource {
    pub fn from_args(take_from_stdin: bool, answers_file: Option<PathBuf>) -> Self {
        match (take_from_stdin, answers_file) {
            (true, _) => AnswerSource::Stdin,
            (false, Some(path)) => AnswerSource::File(path),
            (false, None) => AnswerSource::None,
        }
    }
}

/// Parses answers, trying JSON first and YAML second.
///
/// Blank input yields no overrides.
///
/// # Errors
/// * `Error::AnswersError` if the content is neither valid JSON nor valid YAML, or
///   names a field that does not exist
pub fn parse_answers(content: &str) -> Result<ConfigOverrides> {
    if content.trim().is_empty() {
        return Ok(ConfigOverrides::default());
    }

    match serde_json::from_str(content) {
        Ok(overrides) => Ok(overrides),
        Err(json_err) => {
            debug!("Answers are not JSON ({json_err}), trying YAML.");
            serde_yaml::from_str(content)
                .map_err(|e| Error::AnswersError(format!("invalid answers format: {e}")))
        }
    }
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConfigOverrides> {
    let path = path.as_ref();
    debug!("Loading answers from '{}'.", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_answers(&content)
}

pub fn load_from_stdin() -> Result<ConfigOverrides> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Loads the answers of `source`, if any.
pub fn load_answers(source: &AnswerSource) -> Result<Option<ConfigOverrides>> {
    let overrides = match source {
        AnswerSource::Stdin => load_from_stdin()?,
        AnswerSource::File(path) => load_from_file(path)?,
        AnswerSource::None => return Ok(None),
    };
    Ok(Some(overrides))
}
