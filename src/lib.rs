pub mod alignment;
pub mod config;
pub mod error;
pub mod navigation;
pub mod numerals;
pub mod render;
pub mod search;
pub mod state;
pub mod state_io;
pub mod types {
    pub mod document;
}
pub mod parsing;

pub use alignment::{align, PhraseAligner, PhraseGroup};
pub use error::{ReaderError, Result};
pub use numerals::hebrew_to_number;
