use caixa_core::db::{self, DbPool, WriteHandle};
use std::sync::Arc;
use tempfile::TempDir;

/// Builds a migrated database in a temp directory and spawns the writer
/// actor. The `TempDir` must stay alive for the duration of the test.
pub fn setup_db() -> (TempDir, Arc<DbPool>, WriteHandle) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_file = dir.path().join("caixa.db");
    let db_path = db::init(db_file.to_str().expect("non-utf8 temp path")).expect("db init failed");
    let pool = db::create_pool(&db_path).expect("pool creation failed");
    db::run_migrations(&pool).expect("migrations failed");
    let writer = db::write_actor::spawn_writer((*pool).clone());
    (dir, pool, writer)
}
