//! Runtime configuration for the CLI tool, loaded from JSON.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// How the input file should be interpreted.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Comma-separated integers, one row per line.
    #[default]
    Csv,
    /// PNG/JPEG/etc. decoded to 8-bit grayscale.
    Grayscale,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the downsampled grid as CSV.
    pub csv_out: Option<PathBuf>,
    /// Write the stage diagnostics report as pretty JSON.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub input_format: InputFormat,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RuntimeConfig {
    /// Config for a bare CSV input path with no extra artifacts.
    pub fn for_csv_input(input: PathBuf) -> Self {
        Self {
            input,
            input_format: InputFormat::Csv,
            output: OutputConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
