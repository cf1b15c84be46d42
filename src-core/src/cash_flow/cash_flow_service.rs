use crate::cash_flow::cash_flow_model::{
    CashFlowEntry, CreateCashFlowEntry, MonthlySummary, NewCashFlowEntry, CASH_FLOW_KINDS,
};
use crate::cash_flow::cash_flow_traits::{CashFlowRepositoryTrait, CashFlowServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::recurrence::month_bounds;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

pub struct CashFlowService<T: CashFlowRepositoryTrait> {
    cash_flow_repo: Arc<T>,
}

impl<T: CashFlowRepositoryTrait> CashFlowService<T> {
    pub fn new(cash_flow_repo: Arc<T>) -> Self {
        CashFlowService { cash_flow_repo }
    }

    fn resolve_month(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
        month_bounds(year, month).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid period {}/{}",
                month, year
            )))
        })
    }
}

#[async_trait]
impl<T: CashFlowRepositoryTrait + Send + Sync> CashFlowServiceTrait for CashFlowService<T> {
    fn get_entries(&self, period: Option<(i32, u32)>) -> Result<Vec<CashFlowEntry>> {
        let bounds = match period {
            Some((year, month)) => Some(Self::resolve_month(year, month)?),
            None => None,
        };
        self.cash_flow_repo.list(bounds)
    }

    fn get_entry(&self, id: &str) -> Result<Option<CashFlowEntry>> {
        self.cash_flow_repo.get_by_id(id)
    }

    fn monthly_summary(&self, year: i32, month: u32) -> Result<MonthlySummary> {
        let (first, last) = Self::resolve_month(year, month)?;
        let income_total = self.cash_flow_repo.sum_kind("income", first, last)?;
        let expense_total = self.cash_flow_repo.sum_kind("expense", first, last)?;
        Ok(MonthlySummary {
            month,
            year,
            income_total,
            expense_total,
            net_total: income_total - expense_total,
        })
    }

    async fn create_entry(&self, input: CreateCashFlowEntry) -> Result<CashFlowEntry> {
        if !CASH_FLOW_KINDS.contains(&input.kind.as_str()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown cash-flow kind '{}'",
                input.kind
            ))));
        }
        if input.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "description".to_string(),
            )));
        }
        if input.amount <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be greater than zero".to_string(),
            )));
        }

        let new_entry = NewCashFlowEntry {
            id: None,
            kind: input.kind,
            description: input.description,
            amount: input.amount,
            entry_date: input.entry_date,
            category_id: input.category_id,
            company_id: input.company_id,
            created_at: Utc::now().to_rfc3339(),
        };
        self.cash_flow_repo.insert(new_entry).await
    }

    async fn delete_entry(&self, id: &str) -> Result<usize> {
        self.cash_flow_repo.delete(id).await
    }
}
