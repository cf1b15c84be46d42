use crate::errors::{Error, Result, ValidationError};
use crate::notes::notes_model::{CreateNote, NewNote, Note, NoteChangeset, UpdateNote};
use crate::notes::notes_traits::{NoteRepositoryTrait, NoteServiceTrait};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct NoteService<T: NoteRepositoryTrait> {
    note_repo: Arc<T>,
}

impl<T: NoteRepositoryTrait> NoteService<T> {
    pub fn new(note_repo: Arc<T>) -> Self {
        NoteService { note_repo }
    }
}

#[async_trait]
impl<T: NoteRepositoryTrait + Send + Sync> NoteServiceTrait for NoteService<T> {
    fn get_notes(&self) -> Result<Vec<Note>> {
        self.note_repo.list()
    }

    fn get_note(&self, id: &str) -> Result<Option<Note>> {
        self.note_repo.get_by_id(id)
    }

    async fn create_note(&self, input: CreateNote) -> Result<Note> {
        if input.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }

        let now = Utc::now().to_rfc3339();
        let new_note = NewNote {
            id: None,
            title: input.title,
            content: input.content,
            color: input.color,
            created_at: now.clone(),
            updated_at: now,
        };
        self.note_repo.insert(new_note).await
    }

    async fn update_note(&self, id: &str, input: UpdateNote) -> Result<Note> {
        if let Some(ref title) = input.title {
            if title.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    "title".to_string(),
                )));
            }
        }

        let changes = NoteChangeset {
            title: input.title,
            content: input.content,
            color: input.color,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.note_repo.update(id, changes).await
    }

    async fn delete_note(&self, id: &str) -> Result<usize> {
        self.note_repo.delete(id).await
    }
}
