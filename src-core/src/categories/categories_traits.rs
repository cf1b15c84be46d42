use crate::categories::categories_model::{
    Category, CategoryChangeset, CreateCategory, NewCategory, UpdateCategory,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_all_categories(&self) -> Result<Vec<Category>>;
    fn get_category_by_id(&self, id: &str) -> Result<Option<Category>>;
    /// True when any ledger entry or goal still references the category
    fn is_referenced(&self, category_id: &str) -> Result<bool>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, id: &str, changes: CategoryChangeset) -> Result<Category>;
    async fn delete_category(&self, id: &str) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_all_categories(&self) -> Result<Vec<Category>>;
    fn get_category(&self, id: &str) -> Result<Option<Category>>;
    async fn create_category(&self, input: CreateCategory) -> Result<Category>;
    async fn update_category(&self, id: &str, input: UpdateCategory) -> Result<Category>;
    async fn delete_category(&self, id: &str) -> Result<usize>;
}
