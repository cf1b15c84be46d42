use crate::cash_flow::cash_flow_model::{CashFlowEntry, NewCashFlowEntry};
use crate::cash_flow::cash_flow_traits::CashFlowRepositoryTrait;
use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::schema::cash_flow_entries;
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct CashFlowRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CashFlowRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CashFlowRepository { pool, writer }
    }
}

#[async_trait]
impl CashFlowRepositoryTrait for CashFlowRepository {
    fn list(&self, period: Option<(NaiveDate, NaiveDate)>) -> Result<Vec<CashFlowEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = cash_flow_entries::table.into_boxed();
        if let Some((first, last)) = period {
            query = query
                .filter(cash_flow_entries::entry_date.ge(first))
                .filter(cash_flow_entries::entry_date.le(last));
        }
        Ok(query
            .order(cash_flow_entries::entry_date.asc())
            .load::<CashFlowEntry>(&mut conn)?)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<CashFlowEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(cash_flow_entries::table
            .find(id)
            .first::<CashFlowEntry>(&mut conn)
            .optional()?)
    }

    fn sum_kind(&self, kind: &str, first: NaiveDate, last: NaiveDate) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = cash_flow_entries::table
            .filter(cash_flow_entries::kind.eq(kind))
            .filter(cash_flow_entries::entry_date.ge(first))
            .filter(cash_flow_entries::entry_date.le(last))
            .select(sum(cash_flow_entries::amount))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    async fn insert(&self, new_entry: NewCashFlowEntry) -> Result<CashFlowEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CashFlowEntry> {
                let mut row = new_entry;
                if row.id.is_none() {
                    row.id = Some(Uuid::new_v4().to_string());
                }
                Ok(diesel::insert_into(cash_flow_entries::table)
                    .values(&row)
                    .get_result::<CashFlowEntry>(conn)?)
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(cash_flow_entries::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
