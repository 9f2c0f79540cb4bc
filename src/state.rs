use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReaderError;

pub const DEFAULT_FONT_SIZE: f32 = 1.25;
pub const MIN_FONT_SIZE: f32 = 0.9;
pub const MAX_FONT_SIZE: f32 = 2.0;
pub const FONT_STEP: f32 = 0.1;

/// Which text(s) a verse is displayed in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Hebrew only.
    #[default]
    He,
    /// English only.
    En,
    /// Hebrew and English side by side.
    Dual,
    /// Hebrew phrases with English under each phrase.
    Inter,
}

impl DisplayMode {
    /// Whether surrounding labels (chapter headings, book names) use English.
    pub fn is_english(self) -> bool {
        self == DisplayMode::En
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisplayMode::He => "he",
            DisplayMode::En => "en",
            DisplayMode::Dual => "dual",
            DisplayMode::Inter => "inter",
        };
        f.write_str(s)
    }
}

impl FromStr for DisplayMode {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "he" => Ok(DisplayMode::He),
            "en" => Ok(DisplayMode::En),
            "dual" => Ok(DisplayMode::Dual),
            "inter" => Ok(DisplayMode::Inter),
            other => Err(ReaderError::Config(format!(
                "unknown display mode '{}' (expected he, en, dual or inter)",
                other
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ReaderError::Config(format!(
                "unknown theme '{}' (expected light or dark)",
                other
            ))),
        }
    }
}

/// What the reader is currently looking at.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum View {
    #[default]
    Title,
    #[serde(rename = "fm")]
    FrontMatter { id: String },
    Chapter { book: usize, chapter: usize },
}

/// Display settings handed to the renderer. Never mutated during a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub mode: DisplayMode,
    pub font_size: f32,
}

impl ViewState {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

/// Everything that survives between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReaderState {
    pub position: View,
    pub lang: DisplayMode,
    pub font_size: f32,
    pub theme: Theme,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            position: View::Title,
            lang: DisplayMode::default(),
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::default(),
        }
    }
}

impl ReaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the font size by `delta` rem, clamped to the supported range.
    pub fn adjust_font(&mut self, delta: f32) {
        self.font_size = clamp_font_size(self.font_size + delta);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            mode: self.lang,
            font_size: self.font_size,
        }
    }
}

pub fn clamp_font_size(size: f32) -> f32 {
    if size.is_nan() {
        return DEFAULT_FONT_SIZE;
    }
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}
