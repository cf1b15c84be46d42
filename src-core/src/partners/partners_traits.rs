use crate::errors::Result;
use crate::partners::partners_model::{
    CreatePartner, Customer, CustomerChangeset, NewCustomer, NewSupplier, Supplier,
    SupplierChangeset, UpdatePartner,
};
use async_trait::async_trait;

/// Trait for supplier/customer repository operations
#[async_trait]
pub trait PartnerRepositoryTrait: Send + Sync {
    fn list_suppliers(&self) -> Result<Vec<Supplier>>;
    fn get_supplier_by_id(&self, id: &str) -> Result<Option<Supplier>>;
    fn find_supplier_by_tax_id(&self, tax_id: &str) -> Result<Option<Supplier>>;
    fn supplier_has_entries(&self, id: &str) -> Result<bool>;
    async fn insert_supplier(&self, new_supplier: NewSupplier) -> Result<Supplier>;
    async fn update_supplier(&self, id: &str, changes: SupplierChangeset) -> Result<Supplier>;
    async fn delete_supplier(&self, id: &str) -> Result<usize>;

    fn list_customers(&self) -> Result<Vec<Customer>>;
    fn get_customer_by_id(&self, id: &str) -> Result<Option<Customer>>;
    fn find_customer_by_tax_id(&self, tax_id: &str) -> Result<Option<Customer>>;
    fn customer_has_entries(&self, id: &str) -> Result<bool>;
    async fn insert_customer(&self, new_customer: NewCustomer) -> Result<Customer>;
    async fn update_customer(&self, id: &str, changes: CustomerChangeset) -> Result<Customer>;
    async fn delete_customer(&self, id: &str) -> Result<usize>;
}

/// Trait for supplier/customer service operations
#[async_trait]
pub trait PartnerServiceTrait: Send + Sync {
    fn get_suppliers(&self) -> Result<Vec<Supplier>>;
    fn get_supplier(&self, id: &str) -> Result<Option<Supplier>>;
    async fn create_supplier(&self, input: CreatePartner) -> Result<Supplier>;
    async fn update_supplier(&self, id: &str, input: UpdatePartner) -> Result<Supplier>;
    async fn delete_supplier(&self, id: &str) -> Result<usize>;

    fn get_customers(&self) -> Result<Vec<Customer>>;
    fn get_customer(&self, id: &str) -> Result<Option<Customer>>;
    async fn create_customer(&self, input: CreatePartner) -> Result<Customer>;
    async fn update_customer(&self, id: &str, input: UpdatePartner) -> Result<Customer>;
    async fn delete_customer(&self, id: &str) -> Result<usize>;
}
