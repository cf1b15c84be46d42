use crate::companies::companies_model::{Company, CompanyChangeset, NewCompany};
use crate::companies::companies_model::{CreateCompany, UpdateCompany};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for company repository operations
#[async_trait]
pub trait CompanyRepositoryTrait: Send + Sync {
    fn list_companies(&self) -> Result<Vec<Company>>;
    fn get_company_by_id(&self, id: &str) -> Result<Option<Company>>;
    fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Company>>;
    async fn insert_company(&self, new_company: NewCompany) -> Result<Company>;
    async fn update_company(&self, id: &str, changes: CompanyChangeset) -> Result<Company>;
    async fn delete_company(&self, id: &str) -> Result<usize>;
}

/// Trait for company service operations
#[async_trait]
pub trait CompanyServiceTrait: Send + Sync {
    fn get_companies(&self) -> Result<Vec<Company>>;
    fn get_company(&self, id: &str) -> Result<Option<Company>>;
    async fn create_company(&self, input: CreateCompany) -> Result<Company>;
    async fn update_company(&self, id: &str, input: UpdateCompany) -> Result<Company>;
    async fn delete_company(&self, id: &str) -> Result<usize>;
}
