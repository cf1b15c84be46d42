use crate::cash_flow::cash_flow_model::{
    CashFlowEntry, CreateCashFlowEntry, MonthlySummary, NewCashFlowEntry,
};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for cash-flow repository operations
#[async_trait]
pub trait CashFlowRepositoryTrait: Send + Sync {
    fn list(&self, period: Option<(NaiveDate, NaiveDate)>) -> Result<Vec<CashFlowEntry>>;
    fn get_by_id(&self, id: &str) -> Result<Option<CashFlowEntry>>;
    /// Sums entry amounts of one kind over a date range.
    fn sum_kind(&self, kind: &str, first: NaiveDate, last: NaiveDate) -> Result<f64>;
    async fn insert(&self, new_entry: NewCashFlowEntry) -> Result<CashFlowEntry>;
    async fn delete(&self, id: &str) -> Result<usize>;
}

/// Trait for cash-flow service operations
#[async_trait]
pub trait CashFlowServiceTrait: Send + Sync {
    fn get_entries(&self, period: Option<(i32, u32)>) -> Result<Vec<CashFlowEntry>>;
    fn get_entry(&self, id: &str) -> Result<Option<CashFlowEntry>>;
    fn monthly_summary(&self, year: i32, month: u32) -> Result<MonthlySummary>;
    async fn create_entry(&self, input: CreateCashFlowEntry) -> Result<CashFlowEntry>;
    async fn delete_entry(&self, id: &str) -> Result<usize>;
}
