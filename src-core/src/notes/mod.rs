pub mod notes_model;
pub mod notes_repository;
pub mod notes_service;
pub mod notes_traits;

pub use notes_model::{CreateNote, Note, UpdateNote};
pub use notes_repository::NoteRepository;
pub use notes_service::NoteService;
pub use notes_traits::{NoteRepositoryTrait, NoteServiceTrait};
