//! UI Components
//!
//! Field editors, the list editor, and the record composer.

mod text_field;
mod number_field;
mod toggle_field;
mod list_editor;
mod record_composer;
mod record_preview;

pub use record_composer::{RecordComposer, RecordForm};
pub use record_preview::RecordPreview;
