//! Loader for RON configuration files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{TUNING_SCHEMA_VERSION, TuningFile};
use crate::player::PlayerTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a tuning file from RON text. `file_name` is only used for error context.
pub fn parse_tuning(contents: &str, file_name: &str) -> Result<PlayerTuning, ContentLoadError> {
    let file: TuningFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if file.schema_version != TUNING_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file_name.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                file.schema_version, TUNING_SCHEMA_VERSION
            ),
        });
    }

    Ok(file.tuning)
}

/// Load player tuning from a RON file on disk.
pub fn load_tuning_file(path: &Path) -> Result<PlayerTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}
