use crate::cost_centers::cost_centers_model::{CostCenter, CostCenterChangeset, NewCostCenter};
use crate::cost_centers::cost_centers_traits::CostCenterRepositoryTrait;
use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::schema::{accounts_payable, cost_centers};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct CostCenterRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CostCenterRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CostCenterRepository { pool, writer }
    }
}

#[async_trait]
impl CostCenterRepositoryTrait for CostCenterRepository {
    fn list_cost_centers(&self) -> Result<Vec<CostCenter>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(cost_centers::table
            .order(cost_centers::name.asc())
            .load::<CostCenter>(&mut conn)?)
    }

    fn get_cost_center_by_id(&self, id: &str) -> Result<Option<CostCenter>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(cost_centers::table
            .find(id)
            .first::<CostCenter>(&mut conn)
            .optional()?)
    }

    fn has_entries(&self, id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = accounts_payable::table
            .filter(accounts_payable::cost_center_id.eq(id))
            .count()
            .get_result(&mut conn)?;
        Ok(count > 0)
    }

    async fn insert_cost_center(&self, new_cost_center: NewCostCenter) -> Result<CostCenter> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CostCenter> {
                let mut cost_center = new_cost_center;
                let id = cost_center
                    .id
                    .take()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                cost_center.id = Some(id.clone());

                diesel::insert_into(cost_centers::table)
                    .values(&cost_center)
                    .execute(conn)?;

                Ok(cost_centers::table
                    .find(&id)
                    .first::<CostCenter>(conn)?)
            })
            .await
    }

    async fn update_cost_center(
        &self,
        id: &str,
        changes: CostCenterChangeset,
    ) -> Result<CostCenter> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CostCenter> {
                diesel::update(cost_centers::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(cost_centers::table
                    .find(&id_owned)
                    .first::<CostCenter>(conn)?)
            })
            .await
    }

    async fn delete_cost_center(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(cost_centers::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
