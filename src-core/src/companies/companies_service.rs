use crate::companies::companies_model::{
    Company, CompanyChangeset, CreateCompany, NewCompany, UpdateCompany, COMPANY_STATUSES,
};
use crate::companies::companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct CompanyService<T: CompanyRepositoryTrait> {
    company_repo: Arc<T>,
}

impl<T: CompanyRepositoryTrait> CompanyService<T> {
    pub fn new(company_repo: Arc<T>) -> Self {
        CompanyService { company_repo }
    }

    fn validate_status(status: &str) -> Result<()> {
        if !COMPANY_STATUSES.contains(&status) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown company status '{}'",
                status
            ))));
        }
        Ok(())
    }

    fn require(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                field.to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: CompanyRepositoryTrait + Send + Sync> CompanyServiceTrait for CompanyService<T> {
    fn get_companies(&self) -> Result<Vec<Company>> {
        self.company_repo.list_companies()
    }

    fn get_company(&self, id: &str) -> Result<Option<Company>> {
        self.company_repo.get_company_by_id(id)
    }

    async fn create_company(&self, input: CreateCompany) -> Result<Company> {
        Self::require("name", &input.name)?;
        Self::require("legalName", &input.legal_name)?;
        Self::require("taxId", &input.tax_id)?;

        let status = input.status.unwrap_or_else(|| "active".to_string());
        Self::validate_status(&status)?;

        if self.company_repo.find_by_tax_id(&input.tax_id)?.is_some() {
            return Err(Error::Conflict(format!(
                "Tax id '{}' is already registered",
                input.tax_id
            )));
        }

        let now = Utc::now().to_rfc3339();
        let new_company = NewCompany {
            id: None,
            name: input.name,
            legal_name: input.legal_name,
            tax_id: input.tax_id,
            email: input.email,
            phone: input.phone,
            address: input.address,
            status,
            created_at: now.clone(),
            updated_at: now,
        };

        self.company_repo.insert_company(new_company).await
    }

    async fn update_company(&self, id: &str, input: UpdateCompany) -> Result<Company> {
        if let Some(ref status) = input.status {
            Self::validate_status(status)?;
        }

        if let Some(ref tax_id) = input.tax_id {
            Self::require("taxId", tax_id)?;
            if let Some(existing) = self.company_repo.find_by_tax_id(tax_id)? {
                if existing.id != id {
                    return Err(Error::Conflict(format!(
                        "Tax id '{}' is already registered",
                        tax_id
                    )));
                }
            }
        }

        let changes = CompanyChangeset {
            name: input.name,
            legal_name: input.legal_name,
            tax_id: input.tax_id,
            email: input.email,
            phone: input.phone,
            address: input.address,
            status: input.status,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.company_repo.update_company(id, changes).await
    }

    async fn delete_company(&self, id: &str) -> Result<usize> {
        self.company_repo.delete_company(id).await
    }
}
