use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::goals::goals_model::{FinancialGoal, GoalChangeset, NewFinancialGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::{accounts_payable, accounts_receivable, financial_goals};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<FinancialGoal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(financial_goals::table
            .order(financial_goals::created_at.asc())
            .load::<FinancialGoal>(&mut conn)?)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<FinancialGoal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(financial_goals::table
            .find(id)
            .first::<FinancialGoal>(&mut conn)
            .optional()?)
    }

    fn goals_for_period(&self, month: i32, year: i32) -> Result<Vec<FinancialGoal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(financial_goals::table
            .filter(financial_goals::active.eq(true))
            .filter(financial_goals::month.eq(month))
            .filter(financial_goals::year.eq(year))
            .order(financial_goals::created_at.asc())
            .load::<FinancialGoal>(&mut conn)?)
    }

    fn sum_receivables(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = accounts_receivable::table
            .filter(accounts_receivable::due_date.ge(first))
            .filter(accounts_receivable::due_date.le(last))
            .into_boxed();
        if let Some(category) = category_id {
            query = query.filter(accounts_receivable::category_id.eq(category.to_string()));
        }
        let total: Option<f64> = query
            .select(sum(accounts_receivable::amount))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    fn sum_payables(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = accounts_payable::table
            .filter(accounts_payable::due_date.ge(first))
            .filter(accounts_payable::due_date.le(last))
            .into_boxed();
        if let Some(category) = category_id {
            query = query.filter(accounts_payable::category_id.eq(category.to_string()));
        }
        let total: Option<f64> = query
            .select(sum(accounts_payable::amount))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    async fn insert(&self, new_goal: NewFinancialGoal) -> Result<FinancialGoal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FinancialGoal> {
                let mut row = new_goal;
                if row.id.is_none() {
                    row.id = Some(Uuid::new_v4().to_string());
                }
                Ok(diesel::insert_into(financial_goals::table)
                    .values(&row)
                    .get_result::<FinancialGoal>(conn)?)
            })
            .await
    }

    async fn update(&self, id: &str, changes: GoalChangeset) -> Result<FinancialGoal> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FinancialGoal> {
                diesel::update(financial_goals::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(financial_goals::table
                    .find(&id_owned)
                    .first::<FinancialGoal>(conn)?)
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(financial_goals::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
