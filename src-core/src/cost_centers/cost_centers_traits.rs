use crate::cost_centers::cost_centers_model::{
    CostCenter, CostCenterChangeset, CreateCostCenter, NewCostCenter, UpdateCostCenter,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for cost center repository operations
#[async_trait]
pub trait CostCenterRepositoryTrait: Send + Sync {
    fn list_cost_centers(&self) -> Result<Vec<CostCenter>>;
    fn get_cost_center_by_id(&self, id: &str) -> Result<Option<CostCenter>>;
    fn has_entries(&self, id: &str) -> Result<bool>;
    async fn insert_cost_center(&self, new_cost_center: NewCostCenter) -> Result<CostCenter>;
    async fn update_cost_center(&self, id: &str, changes: CostCenterChangeset)
        -> Result<CostCenter>;
    async fn delete_cost_center(&self, id: &str) -> Result<usize>;
}

/// Trait for cost center service operations
#[async_trait]
pub trait CostCenterServiceTrait: Send + Sync {
    fn get_cost_centers(&self) -> Result<Vec<CostCenter>>;
    fn get_cost_center(&self, id: &str) -> Result<Option<CostCenter>>;
    async fn create_cost_center(&self, input: CreateCostCenter) -> Result<CostCenter>;
    async fn update_cost_center(&self, id: &str, input: UpdateCostCenter) -> Result<CostCenter>;
    async fn delete_cost_center(&self, id: &str) -> Result<usize>;
}
