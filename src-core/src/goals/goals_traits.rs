use crate::errors::Result;
use crate::goals::goals_model::{
    CreateGoal, FinancialGoal, GoalChangeset, GoalProgress, NewFinancialGoal, UpdateGoal,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<FinancialGoal>>;
    fn get_by_id(&self, id: &str) -> Result<Option<FinancialGoal>>;
    /// Active goals scheduled for exactly that month and year, in
    /// creation order.
    fn goals_for_period(&self, month: i32, year: i32) -> Result<Vec<FinancialGoal>>;
    fn sum_receivables(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<f64>;
    fn sum_payables(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        category_id: Option<&str>,
    ) -> Result<f64>;
    async fn insert(&self, new_goal: NewFinancialGoal) -> Result<FinancialGoal>;
    async fn update(&self, id: &str, changes: GoalChangeset) -> Result<FinancialGoal>;
    async fn delete(&self, id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<FinancialGoal>>;
    fn get_goal(&self, id: &str) -> Result<Option<FinancialGoal>>;
    fn get_progress(&self, month: i32, year: i32) -> Result<Vec<GoalProgress>>;
    async fn create_goal(&self, input: CreateGoal) -> Result<FinancialGoal>;
    async fn update_goal(&self, id: &str, input: UpdateGoal) -> Result<FinancialGoal>;
    async fn delete_goal(&self, id: &str) -> Result<usize>;
}
