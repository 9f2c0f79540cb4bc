use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ReaderError, Result};
use crate::state::{clamp_font_size, ReaderState};

/// Saves the reading position and preferences as pretty JSON.
pub fn save_state(state: &ReaderState, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ReaderError::io(parent, e))?;
    }

    let file = File::create(file_path).map_err(|e| ReaderError::io(file_path, e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, state).map_err(|e| ReaderError::json(file_path, e))?;

    info!(path = %file_path.display(), "saved reader state");
    Ok(())
}

/// Loads the saved state. A missing or unparseable file yields defaults; the
/// latter is logged.
pub fn load_state(file_path: &Path) -> Result<ReaderState> {
    load_state_or(file_path, ReaderState::default())
}

/// Like [`load_state`], but a missing or unparseable file yields `fallback`.
pub fn load_state_or(file_path: &Path, fallback: ReaderState) -> Result<ReaderState> {
    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(fallback),
        Err(e) => return Err(ReaderError::io(file_path, e)),
    };

    match serde_json::from_reader::<_, ReaderState>(BufReader::new(file)) {
        Ok(mut state) => {
            state.font_size = clamp_font_size(state.font_size);
            Ok(state)
        }
        Err(e) => {
            warn!(path = %file_path.display(), error = %e, "ignoring unreadable reader state");
            Ok(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DisplayMode, Theme, View};

    #[test]
    fn round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let state = ReaderState {
            position: View::Chapter { book: 1, chapter: 3 },
            lang: DisplayMode::Dual,
            font_size: 1.5,
            theme: Theme::Dark,
        };
        save_state(&state, &path).unwrap();
        assert_eq!(load_state(&path).unwrap(), state);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_state(&dir.path().join("absent.json")).unwrap();
        assert_eq!(state, ReaderState::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{\"position\": 42").unwrap();
        assert_eq!(load_state(&path).unwrap(), ReaderState::default());
    }

    #[test]
    fn fallback_replaces_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = ReaderState {
            lang: DisplayMode::Inter,
            font_size: 1.6,
            ..ReaderState::default()
        };

        let absent = dir.path().join("absent.json");
        assert_eq!(load_state_or(&absent, fallback.clone()).unwrap(), fallback);

        let corrupt = dir.path().join("state.json");
        std::fs::write(&corrupt, "not json").unwrap();
        assert_eq!(load_state_or(&corrupt, fallback.clone()).unwrap(), fallback);
    }

    #[test]
    fn out_of_range_font_is_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"font_size": 9.0}"#).unwrap();
        assert_eq!(load_state(&path).unwrap().font_size, 2.0);
    }
}
