use crate::errors::Result;
use crate::ledger::ledger_model::{
    AccountPayable, AccountReceivable, CreateAccountPayable, CreateAccountReceivable,
    NewAccountPayable, NewAccountReceivable, PayableChangeset, ReceivableChangeset,
    UpdateAccountPayable, UpdateAccountReceivable,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for ledger repository operations
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    fn list_payables(&self, period: Option<(NaiveDate, NaiveDate)>) -> Result<Vec<AccountPayable>>;
    fn get_payable_by_id(&self, id: &str) -> Result<Option<AccountPayable>>;
    /// Inserts all rows of a recurrence series in one transaction and
    /// returns the base (first) row.
    async fn insert_payable_series(&self, rows: Vec<NewAccountPayable>) -> Result<AccountPayable>;
    async fn update_payable(&self, id: &str, changes: PayableChangeset) -> Result<AccountPayable>;
    async fn delete_payable(&self, id: &str) -> Result<usize>;

    fn list_receivables(
        &self,
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<AccountReceivable>>;
    fn get_receivable_by_id(&self, id: &str) -> Result<Option<AccountReceivable>>;
    async fn insert_receivable_series(
        &self,
        rows: Vec<NewAccountReceivable>,
    ) -> Result<AccountReceivable>;
    async fn update_receivable(
        &self,
        id: &str,
        changes: ReceivableChangeset,
    ) -> Result<AccountReceivable>;
    async fn delete_receivable(&self, id: &str) -> Result<usize>;
}

/// Trait for ledger service operations
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    fn get_payables(&self, period: Option<(i32, u32)>) -> Result<Vec<AccountPayable>>;
    fn get_payable(&self, id: &str) -> Result<Option<AccountPayable>>;
    async fn create_payable(&self, input: CreateAccountPayable) -> Result<AccountPayable>;
    async fn update_payable(&self, id: &str, input: UpdateAccountPayable)
        -> Result<AccountPayable>;
    async fn set_payable_status(&self, id: &str, status: &str) -> Result<AccountPayable>;
    async fn delete_payable(&self, id: &str) -> Result<usize>;

    fn get_receivables(&self, period: Option<(i32, u32)>) -> Result<Vec<AccountReceivable>>;
    fn get_receivable(&self, id: &str) -> Result<Option<AccountReceivable>>;
    async fn create_receivable(&self, input: CreateAccountReceivable)
        -> Result<AccountReceivable>;
    async fn update_receivable(
        &self,
        id: &str,
        input: UpdateAccountReceivable,
    ) -> Result<AccountReceivable>;
    async fn set_receivable_status(&self, id: &str, status: &str) -> Result<AccountReceivable>;
    async fn delete_receivable(&self, id: &str) -> Result<usize>;
}
