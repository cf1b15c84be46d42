use crate::cost_centers::cost_centers_model::{
    CostCenter, CostCenterChangeset, CreateCostCenter, NewCostCenter, UpdateCostCenter,
};
use crate::cost_centers::cost_centers_traits::{
    CostCenterRepositoryTrait, CostCenterServiceTrait,
};
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct CostCenterService<T: CostCenterRepositoryTrait> {
    cost_center_repo: Arc<T>,
}

impl<T: CostCenterRepositoryTrait> CostCenterService<T> {
    pub fn new(cost_center_repo: Arc<T>) -> Self {
        CostCenterService { cost_center_repo }
    }
}

#[async_trait]
impl<T: CostCenterRepositoryTrait + Send + Sync> CostCenterServiceTrait for CostCenterService<T> {
    fn get_cost_centers(&self) -> Result<Vec<CostCenter>> {
        self.cost_center_repo.list_cost_centers()
    }

    fn get_cost_center(&self, id: &str) -> Result<Option<CostCenter>> {
        self.cost_center_repo.get_cost_center_by_id(id)
    }

    async fn create_cost_center(&self, input: CreateCostCenter) -> Result<CostCenter> {
        if input.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }

        let now = Utc::now().to_rfc3339();
        let new_cost_center = NewCostCenter {
            id: None,
            name: input.name,
            description: input.description,
            active: input.active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };

        self.cost_center_repo
            .insert_cost_center(new_cost_center)
            .await
    }

    async fn update_cost_center(&self, id: &str, input: UpdateCostCenter) -> Result<CostCenter> {
        let changes = CostCenterChangeset {
            name: input.name,
            description: input.description,
            active: input.active,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.cost_center_repo.update_cost_center(id, changes).await
    }

    async fn delete_cost_center(&self, id: &str) -> Result<usize> {
        if self.cost_center_repo.has_entries(id)? {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot delete cost center: payable entries reference it".to_string(),
            )));
        }
        self.cost_center_repo.delete_cost_center(id).await
    }
}
