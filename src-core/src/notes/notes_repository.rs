use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::notes::notes_model::{NewNote, Note, NoteChangeset};
use crate::notes::notes_traits::NoteRepositoryTrait;
use crate::schema::notes;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct NoteRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl NoteRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        NoteRepository { pool, writer }
    }
}

#[async_trait]
impl NoteRepositoryTrait for NoteRepository {
    fn list(&self) -> Result<Vec<Note>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(notes::table
            .order(notes::updated_at.desc())
            .load::<Note>(&mut conn)?)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Note>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(notes::table
            .find(id)
            .first::<Note>(&mut conn)
            .optional()?)
    }

    async fn insert(&self, new_note: NewNote) -> Result<Note> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Note> {
                let mut row = new_note;
                if row.id.is_none() {
                    row.id = Some(Uuid::new_v4().to_string());
                }
                Ok(diesel::insert_into(notes::table)
                    .values(&row)
                    .get_result::<Note>(conn)?)
            })
            .await
    }

    async fn update(&self, id: &str, changes: NoteChangeset) -> Result<Note> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Note> {
                diesel::update(notes::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(notes::table.find(&id_owned).first::<Note>(conn)?)
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(notes::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
