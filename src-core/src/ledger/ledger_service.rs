use crate::errors::{Error, Result, ValidationError};
use crate::ledger::ledger_model::{
    AccountPayable, AccountReceivable, CreateAccountPayable, CreateAccountReceivable,
    NewAccountPayable, NewAccountReceivable, PayableChangeset, ReceivableChangeset,
    UpdateAccountPayable, UpdateAccountReceivable, ENTRY_STATUSES,
};
use crate::ledger::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::ledger::recurrence::{month_bounds, occurrences, Recurrence};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

pub struct LedgerService<T: LedgerRepositoryTrait> {
    ledger_repo: Arc<T>,
}

impl<T: LedgerRepositoryTrait> LedgerService<T> {
    pub fn new(ledger_repo: Arc<T>) -> Self {
        LedgerService { ledger_repo }
    }

    fn validate_status(status: &str) -> Result<()> {
        if !ENTRY_STATUSES.contains(&status) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown entry status '{}'",
                status
            ))));
        }
        Ok(())
    }

    fn validate_base(description: &str, amount: f64) -> Result<()> {
        if description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "description".to_string(),
            )));
        }
        if amount <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }

    fn resolve_period(period: Option<(i32, u32)>) -> Result<Option<(NaiveDate, NaiveDate)>> {
        match period {
            None => Ok(None),
            Some((year, month)) => {
                let bounds = month_bounds(year, month).ok_or_else(|| {
                    Error::Validation(ValidationError::InvalidInput(format!(
                        "Invalid period {}/{}",
                        month, year
                    )))
                })?;
                Ok(Some(bounds))
            }
        }
    }
}

#[async_trait]
impl<T: LedgerRepositoryTrait + Send + Sync> LedgerServiceTrait for LedgerService<T> {
    fn get_payables(&self, period: Option<(i32, u32)>) -> Result<Vec<AccountPayable>> {
        self.ledger_repo
            .list_payables(Self::resolve_period(period)?)
    }

    fn get_payable(&self, id: &str) -> Result<Option<AccountPayable>> {
        self.ledger_repo.get_payable_by_id(id)
    }

    async fn create_payable(&self, input: CreateAccountPayable) -> Result<AccountPayable> {
        Self::validate_base(&input.description, input.amount)?;

        let status = input.status.unwrap_or_else(|| "pending".to_string());
        Self::validate_status(&status)?;

        let recurrence: Recurrence = input
            .recurrence
            .as_deref()
            .unwrap_or("none")
            .parse()?;

        let due_dates = occurrences(input.due_date, recurrence, input.recurrence_end);
        let now = Utc::now().to_rfc3339();

        let rows: Vec<NewAccountPayable> = due_dates
            .into_iter()
            .map(|due_date| NewAccountPayable {
                id: None,
                description: input.description.clone(),
                amount: input.amount,
                due_date,
                status: status.clone(),
                supplier_id: input.supplier_id.clone(),
                category_id: input.category_id.clone(),
                cost_center_id: input.cost_center_id.clone(),
                payment_method: input.payment_method.clone(),
                notes: input.notes.clone(),
                recurrence: recurrence.as_str().to_string(),
                recurrence_end: input.recurrence_end,
                company_id: input.company_id.clone(),
                created_at: now.clone(),
                updated_at: now.clone(),
            })
            .collect();

        self.ledger_repo.insert_payable_series(rows).await
    }

    async fn update_payable(
        &self,
        id: &str,
        input: UpdateAccountPayable,
    ) -> Result<AccountPayable> {
        if let Some(ref status) = input.status {
            Self::validate_status(status)?;
        }
        if let Some(amount) = input.amount {
            if amount <= 0.0 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Amount must be greater than zero".to_string(),
                )));
            }
        }

        let changes = PayableChangeset {
            description: input.description,
            amount: input.amount,
            due_date: input.due_date,
            status: input.status,
            supplier_id: input.supplier_id,
            category_id: input.category_id,
            cost_center_id: input.cost_center_id,
            payment_method: input.payment_method,
            notes: input.notes,
            company_id: input.company_id,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.ledger_repo.update_payable(id, changes).await
    }

    async fn set_payable_status(&self, id: &str, status: &str) -> Result<AccountPayable> {
        Self::validate_status(status)?;
        let changes = PayableChangeset {
            description: None,
            amount: None,
            due_date: None,
            status: Some(status.to_string()),
            supplier_id: None,
            category_id: None,
            cost_center_id: None,
            payment_method: None,
            notes: None,
            company_id: None,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.ledger_repo.update_payable(id, changes).await
    }

    async fn delete_payable(&self, id: &str) -> Result<usize> {
        self.ledger_repo.delete_payable(id).await
    }

    fn get_receivables(&self, period: Option<(i32, u32)>) -> Result<Vec<AccountReceivable>> {
        self.ledger_repo
            .list_receivables(Self::resolve_period(period)?)
    }

    fn get_receivable(&self, id: &str) -> Result<Option<AccountReceivable>> {
        self.ledger_repo.get_receivable_by_id(id)
    }

    async fn create_receivable(
        &self,
        input: CreateAccountReceivable,
    ) -> Result<AccountReceivable> {
        Self::validate_base(&input.description, input.amount)?;

        let status = input.status.unwrap_or_else(|| "pending".to_string());
        Self::validate_status(&status)?;

        let recurrence: Recurrence = input
            .recurrence
            .as_deref()
            .unwrap_or("none")
            .parse()?;

        let due_dates = occurrences(input.due_date, recurrence, input.recurrence_end);
        let now = Utc::now().to_rfc3339();

        let rows: Vec<NewAccountReceivable> = due_dates
            .into_iter()
            .map(|due_date| NewAccountReceivable {
                id: None,
                description: input.description.clone(),
                amount: input.amount,
                due_date,
                status: status.clone(),
                customer_id: input.customer_id.clone(),
                category_id: input.category_id.clone(),
                payment_method: input.payment_method.clone(),
                notes: input.notes.clone(),
                recurrence: recurrence.as_str().to_string(),
                recurrence_end: input.recurrence_end,
                company_id: input.company_id.clone(),
                created_at: now.clone(),
                updated_at: now.clone(),
            })
            .collect();

        self.ledger_repo.insert_receivable_series(rows).await
    }

    async fn update_receivable(
        &self,
        id: &str,
        input: UpdateAccountReceivable,
    ) -> Result<AccountReceivable> {
        if let Some(ref status) = input.status {
            Self::validate_status(status)?;
        }
        if let Some(amount) = input.amount {
            if amount <= 0.0 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Amount must be greater than zero".to_string(),
                )));
            }
        }

        let changes = ReceivableChangeset {
            description: input.description,
            amount: input.amount,
            due_date: input.due_date,
            status: input.status,
            customer_id: input.customer_id,
            category_id: input.category_id,
            payment_method: input.payment_method,
            notes: input.notes,
            company_id: input.company_id,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.ledger_repo.update_receivable(id, changes).await
    }

    async fn set_receivable_status(&self, id: &str, status: &str) -> Result<AccountReceivable> {
        Self::validate_status(status)?;
        let changes = ReceivableChangeset {
            description: None,
            amount: None,
            due_date: None,
            status: Some(status.to_string()),
            customer_id: None,
            category_id: None,
            payment_method: None,
            notes: None,
            company_id: None,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.ledger_repo.update_receivable(id, changes).await
    }

    async fn delete_receivable(&self, id: &str) -> Result<usize> {
        self.ledger_repo.delete_receivable(id).await
    }
}
