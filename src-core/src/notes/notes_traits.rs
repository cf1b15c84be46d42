use crate::errors::Result;
use crate::notes::notes_model::{CreateNote, NewNote, Note, NoteChangeset, UpdateNote};
use async_trait::async_trait;

/// Trait for note repository operations
#[async_trait]
pub trait NoteRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Note>>;
    fn get_by_id(&self, id: &str) -> Result<Option<Note>>;
    async fn insert(&self, new_note: NewNote) -> Result<Note>;
    async fn update(&self, id: &str, changes: NoteChangeset) -> Result<Note>;
    async fn delete(&self, id: &str) -> Result<usize>;
}

/// Trait for note service operations
#[async_trait]
pub trait NoteServiceTrait: Send + Sync {
    fn get_notes(&self) -> Result<Vec<Note>>;
    fn get_note(&self, id: &str) -> Result<Option<Note>>;
    async fn create_note(&self, input: CreateNote) -> Result<Note>;
    async fn update_note(&self, id: &str, input: UpdateNote) -> Result<Note>;
    async fn delete_note(&self, id: &str) -> Result<usize>;
}
