use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::alignment::BreakStarters;
use crate::error::{ReaderError, Result};
use crate::state::{DisplayMode, ReaderState, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};

pub const DEFAULT_CONFIG_FILE: &str = "reader.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_file: PathBuf,
    pub state_file: PathBuf,
    pub display: DisplayConfig,
    pub chunker: ChunkerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.json"),
            state_file: PathBuf::from("reader_state.json"),
            display: DisplayConfig::default(),
            chunker: ChunkerConfig::default(),
        }
    }
}

/// Display defaults used until the reader saves its own preferences.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    pub font_size: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl DisplayConfig {
    /// Reader state to start from when no usable state file exists.
    pub fn initial_state(&self) -> ReaderState {
        ReaderState {
            lang: self.mode,
            font_size: self.font_size,
            ..ReaderState::default()
        }
    }
}

/// Extra break-starters appended to the built-in Hebrew table.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChunkerConfig {
    pub extra_words: Vec<String>,
    pub extra_prefixes: Vec<String>,
}

impl ChunkerConfig {
    pub fn break_starters(&self) -> Result<BreakStarters> {
        if self.extra_words.is_empty() && self.extra_prefixes.is_empty() {
            return Ok(BreakStarters::hebrew());
        }
        BreakStarters::hebrew().with_extra(&self.extra_words, &self.extra_prefixes)
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| ReaderError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let size = self.display.font_size;
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(ReaderError::Config(format!(
                "display.font_size {} is outside {}..={}",
                size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        let blank = self
            .chunker
            .extra_words
            .iter()
            .chain(&self.chunker.extra_prefixes)
            .any(|s| s.trim().is_empty());
        if blank {
            return Err(ReaderError::Config(
                "chunker break-starter entries must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| ReaderError::io(file_path, e))?;
    Config::from_toml_str(&contents).map_err(|e| match e {
        ReaderError::Config(msg) => {
            ReaderError::Config(format!("{}: {}", file_path.display(), msg))
        }
        other => other,
    })
}

/// Loads `file_path` if it exists, otherwise returns the defaults.
pub fn load_config_or_default(file_path: &Path) -> Result<Config> {
    if file_path.is_file() {
        load_config_from_file(file_path)
    } else {
        Ok(Config::default())
    }
}
