//! Attaching generated summaries to stored notes.
//!
//! Notes live in the hosted database; this module only sees them through
//! [`NoteStore`].

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::summarize::SummarizationService;
use crate::core::models::{Note, NoteChanges};
use crate::errors::SummarizeError;

/// Content beyond this many characters is not sent for summarization.
pub const MAX_NOTE_CHARS: usize = 5000;

/// Storage collaborator holding notes keyed by id.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn get_note(&self, id: Uuid) -> Result<Option<Note>, SummarizeError>;

    async fn update_note(&self, id: Uuid, changes: NoteChanges) -> Result<Note, SummarizeError>;
}

/// Summarizes a note owned by `owner` and stores the summary on it.
///
/// # Errors
///
/// Returns `NoteNotFound` if the note does not exist or belongs to someone
/// else, `InvalidInput` if it has no content, and any store error unchanged.
pub async fn summarize_note(
    service: &SummarizationService,
    store: &dyn NoteStore,
    owner: Uuid,
    note_id: Uuid,
) -> Result<Note, SummarizeError> {
    let note = store
        .get_note(note_id)
        .await?
        .filter(|note| note.user_id == owner)
        .ok_or_else(|| SummarizeError::NoteNotFound(note_id.to_string()))?;

    if note.content.trim().is_empty() {
        return Err(SummarizeError::InvalidInput);
    }

    let content: String = note.content.chars().take(MAX_NOTE_CHARS).collect();
    let result = service.summarize(Some(&content)).await?;

    info!(note_id = %note_id, "Storing generated summary");

    let changes = NoteChanges {
        summary: Some(result.summary),
        ..NoteChanges::default()
    };
    store.update_note(note_id, changes.normalized()).await
}
