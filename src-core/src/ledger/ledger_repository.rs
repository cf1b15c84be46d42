use crate::db::{get_connection, WriteHandle};
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::ledger_model::{
    AccountPayable, AccountReceivable, NewAccountPayable, NewAccountReceivable, PayableChangeset,
    ReceivableChangeset,
};
use crate::ledger::ledger_traits::LedgerRepositoryTrait;
use crate::schema::{accounts_payable, accounts_receivable};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct LedgerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        LedgerRepository { pool, writer }
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    fn list_payables(&self, period: Option<(NaiveDate, NaiveDate)>) -> Result<Vec<AccountPayable>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = accounts_payable::table.into_boxed();
        if let Some((first, last)) = period {
            query = query
                .filter(accounts_payable::due_date.ge(first))
                .filter(accounts_payable::due_date.le(last));
        }
        Ok(query
            .order(accounts_payable::due_date.asc())
            .load::<AccountPayable>(&mut conn)?)
    }

    fn get_payable_by_id(&self, id: &str) -> Result<Option<AccountPayable>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(accounts_payable::table
            .find(id)
            .first::<AccountPayable>(&mut conn)
            .optional()?)
    }

    async fn insert_payable_series(&self, rows: Vec<NewAccountPayable>) -> Result<AccountPayable> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<AccountPayable> {
                let mut base_id: Option<String> = None;
                for new_row in rows {
                    let mut row = new_row;
                    if row.id.is_none() {
                        row.id = Some(Uuid::new_v4().to_string());
                    }
                    if base_id.is_none() {
                        base_id = row.id.clone();
                    }

                    diesel::insert_into(accounts_payable::table)
                        .values(&row)
                        .execute(conn)?;
                }

                let base_id = base_id.ok_or_else(|| {
                    Error::Validation(ValidationError::InvalidInput(
                        "Empty entry series".to_string(),
                    ))
                })?;

                Ok(accounts_payable::table
                    .find(base_id)
                    .first::<AccountPayable>(conn)?)
            })
            .await
    }

    async fn update_payable(&self, id: &str, changes: PayableChangeset) -> Result<AccountPayable> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<AccountPayable> {
                diesel::update(accounts_payable::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(accounts_payable::table
                    .find(&id_owned)
                    .first::<AccountPayable>(conn)?)
            })
            .await
    }

    async fn delete_payable(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(accounts_payable::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }

    fn list_receivables(
        &self,
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<AccountReceivable>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = accounts_receivable::table.into_boxed();
        if let Some((first, last)) = period {
            query = query
                .filter(accounts_receivable::due_date.ge(first))
                .filter(accounts_receivable::due_date.le(last));
        }
        Ok(query
            .order(accounts_receivable::due_date.asc())
            .load::<AccountReceivable>(&mut conn)?)
    }

    fn get_receivable_by_id(&self, id: &str) -> Result<Option<AccountReceivable>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(accounts_receivable::table
            .find(id)
            .first::<AccountReceivable>(&mut conn)
            .optional()?)
    }

    async fn insert_receivable_series(
        &self,
        rows: Vec<NewAccountReceivable>,
    ) -> Result<AccountReceivable> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<AccountReceivable> {
                    let mut base_id: Option<String> = None;
                    for new_row in rows {
                        let mut row = new_row;
                        if row.id.is_none() {
                            row.id = Some(Uuid::new_v4().to_string());
                        }
                        if base_id.is_none() {
                            base_id = row.id.clone();
                        }

                        diesel::insert_into(accounts_receivable::table)
                            .values(&row)
                            .execute(conn)?;
                    }

                    let base_id = base_id.ok_or_else(|| {
                        Error::Validation(ValidationError::InvalidInput(
                            "Empty entry series".to_string(),
                        ))
                    })?;

                    Ok(accounts_receivable::table
                        .find(base_id)
                        .first::<AccountReceivable>(conn)?)
                },
            )
            .await
    }

    async fn update_receivable(
        &self,
        id: &str,
        changes: ReceivableChangeset,
    ) -> Result<AccountReceivable> {
        let id_owned = id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<AccountReceivable> {
                    diesel::update(accounts_receivable::table.find(&id_owned))
                        .set(&changes)
                        .execute(conn)?;

                    Ok(accounts_receivable::table
                        .find(&id_owned)
                        .first::<AccountReceivable>(conn)?)
                },
            )
            .await
    }

    async fn delete_receivable(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(accounts_receivable::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
