use crate::errors::{Error, Result, ValidationError};
use crate::partners::partners_model::{
    CreatePartner, Customer, CustomerChangeset, NewCustomer, NewSupplier, Supplier,
    SupplierChangeset, UpdatePartner,
};
use crate::partners::partners_traits::{PartnerRepositoryTrait, PartnerServiceTrait};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct PartnerService<T: PartnerRepositoryTrait> {
    partner_repo: Arc<T>,
}

impl<T: PartnerRepositoryTrait> PartnerService<T> {
    pub fn new(partner_repo: Arc<T>) -> Self {
        PartnerService { partner_repo }
    }

    fn validate_create(input: &CreatePartner) -> Result<()> {
        if input.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: PartnerRepositoryTrait + Send + Sync> PartnerServiceTrait for PartnerService<T> {
    fn get_suppliers(&self) -> Result<Vec<Supplier>> {
        self.partner_repo.list_suppliers()
    }

    fn get_supplier(&self, id: &str) -> Result<Option<Supplier>> {
        self.partner_repo.get_supplier_by_id(id)
    }

    async fn create_supplier(&self, input: CreatePartner) -> Result<Supplier> {
        Self::validate_create(&input)?;

        if let Some(ref tax_id) = input.tax_id {
            if self.partner_repo.find_supplier_by_tax_id(tax_id)?.is_some() {
                return Err(Error::Conflict(format!(
                    "Supplier with tax id '{}' already exists",
                    tax_id
                )));
            }
        }

        let now = Utc::now().to_rfc3339();
        let new_supplier = NewSupplier {
            id: None,
            name: input.name,
            tax_id: input.tax_id,
            email: input.email,
            phone: input.phone,
            notes: input.notes,
            active: input.active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };

        self.partner_repo.insert_supplier(new_supplier).await
    }

    async fn update_supplier(&self, id: &str, input: UpdatePartner) -> Result<Supplier> {
        if let Some(ref tax_id) = input.tax_id {
            if let Some(existing) = self.partner_repo.find_supplier_by_tax_id(tax_id)? {
                if existing.id != id {
                    return Err(Error::Conflict(format!(
                        "Supplier with tax id '{}' already exists",
                        tax_id
                    )));
                }
            }
        }

        let changes = SupplierChangeset {
            name: input.name,
            tax_id: input.tax_id,
            email: input.email,
            phone: input.phone,
            notes: input.notes,
            active: input.active,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.partner_repo.update_supplier(id, changes).await
    }

    async fn delete_supplier(&self, id: &str) -> Result<usize> {
        if self.partner_repo.supplier_has_entries(id)? {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot delete supplier: payable entries reference it".to_string(),
            )));
        }
        self.partner_repo.delete_supplier(id).await
    }

    fn get_customers(&self) -> Result<Vec<Customer>> {
        self.partner_repo.list_customers()
    }

    fn get_customer(&self, id: &str) -> Result<Option<Customer>> {
        self.partner_repo.get_customer_by_id(id)
    }

    async fn create_customer(&self, input: CreatePartner) -> Result<Customer> {
        Self::validate_create(&input)?;

        if let Some(ref tax_id) = input.tax_id {
            if self.partner_repo.find_customer_by_tax_id(tax_id)?.is_some() {
                return Err(Error::Conflict(format!(
                    "Customer with tax id '{}' already exists",
                    tax_id
                )));
            }
        }

        let now = Utc::now().to_rfc3339();
        let new_customer = NewCustomer {
            id: None,
            name: input.name,
            tax_id: input.tax_id,
            email: input.email,
            phone: input.phone,
            notes: input.notes,
            active: input.active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };

        self.partner_repo.insert_customer(new_customer).await
    }

    async fn update_customer(&self, id: &str, input: UpdatePartner) -> Result<Customer> {
        if let Some(ref tax_id) = input.tax_id {
            if let Some(existing) = self.partner_repo.find_customer_by_tax_id(tax_id)? {
                if existing.id != id {
                    return Err(Error::Conflict(format!(
                        "Customer with tax id '{}' already exists",
                        tax_id
                    )));
                }
            }
        }

        let changes = CustomerChangeset {
            name: input.name,
            tax_id: input.tax_id,
            email: input.email,
            phone: input.phone,
            notes: input.notes,
            active: input.active,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.partner_repo.update_customer(id, changes).await
    }

    async fn delete_customer(&self, id: &str) -> Result<usize> {
        if self.partner_repo.customer_has_entries(id)? {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot delete customer: receivable entries reference it".to_string(),
            )));
        }
        self.partner_repo.delete_customer(id).await
    }
}
