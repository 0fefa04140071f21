pub mod fallback;
pub mod notes;
pub mod summarize;

pub use fallback::fallback_summary;
pub use notes::{NoteStore, summarize_note};
pub use summarize::SummarizationService;
