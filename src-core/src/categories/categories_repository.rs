use crate::categories::categories_model::{Category, CategoryChangeset, NewCategory};
use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::schema::{accounts_payable, accounts_receivable, cash_flow_entries, categories, financial_goals};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct CategoryRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn get_all_categories(&self) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .order((categories::kind.asc(), categories::name.asc()))
            .load::<Category>(&mut conn)?)
    }

    fn get_category_by_id(&self, id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .find(id)
            .first::<Category>(&mut conn)
            .optional()?)
    }

    fn is_referenced(&self, category_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;

        let payables: i64 = accounts_payable::table
            .filter(accounts_payable::category_id.eq(category_id))
            .count()
            .get_result(&mut conn)?;
        if payables > 0 {
            return Ok(true);
        }

        let receivables: i64 = accounts_receivable::table
            .filter(accounts_receivable::category_id.eq(category_id))
            .count()
            .get_result(&mut conn)?;
        if receivables > 0 {
            return Ok(true);
        }

        let cash_flow: i64 = cash_flow_entries::table
            .filter(cash_flow_entries::category_id.eq(category_id))
            .count()
            .get_result(&mut conn)?;
        if cash_flow > 0 {
            return Ok(true);
        }

        let goals: i64 = financial_goals::table
            .filter(financial_goals::category_id.eq(category_id))
            .filter(financial_goals::active.eq(true))
            .count()
            .get_result(&mut conn)?;
        Ok(goals > 0)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let mut category = new_category;
                let id = category
                    .id
                    .take()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                category.id = Some(id.clone());

                diesel::insert_into(categories::table)
                    .values(&category)
                    .execute(conn)?;

                Ok(categories::table.find(&id).first::<Category>(conn)?)
            })
            .await
    }

    async fn update_category(&self, id: &str, changes: CategoryChangeset) -> Result<Category> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                diesel::update(categories::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(categories::table
                    .find(&id_owned)
                    .first::<Category>(conn)?)
            })
            .await
    }

    async fn delete_category(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(categories::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
