use crate::categories::categories_model::{
    Category, CategoryChangeset, CreateCategory, NewCategory, UpdateCategory, CATEGORY_KINDS,
};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct CategoryService<T: CategoryRepositoryTrait> {
    category_repo: Arc<T>,
}

impl<T: CategoryRepositoryTrait> CategoryService<T> {
    pub fn new(category_repo: Arc<T>) -> Self {
        CategoryService { category_repo }
    }

    fn validate_kind(kind: &str) -> Result<()> {
        if !CATEGORY_KINDS.contains(&kind) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown category kind '{}', expected 'income' or 'expense'",
                kind
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: CategoryRepositoryTrait + Send + Sync> CategoryServiceTrait for CategoryService<T> {
    fn get_all_categories(&self) -> Result<Vec<Category>> {
        self.category_repo.get_all_categories()
    }

    fn get_category(&self, id: &str) -> Result<Option<Category>> {
        self.category_repo.get_category_by_id(id)
    }

    async fn create_category(&self, input: CreateCategory) -> Result<Category> {
        if input.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Self::validate_kind(&input.kind)?;

        let now = Utc::now().to_rfc3339();
        let new_category = NewCategory {
            id: None,
            name: input.name,
            kind: input.kind,
            color: input.color,
            created_at: now.clone(),
            updated_at: now,
        };

        self.category_repo.create_category(new_category).await
    }

    async fn update_category(&self, id: &str, input: UpdateCategory) -> Result<Category> {
        if let Some(ref kind) = input.kind {
            Self::validate_kind(kind)?;
        }

        let changes = CategoryChangeset {
            name: input.name,
            kind: input.kind,
            color: input.color,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.category_repo.update_category(id, changes).await
    }

    async fn delete_category(&self, id: &str) -> Result<usize> {
        if self.category_repo.is_referenced(id)? {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot delete category: ledger entries or goals reference it".to_string(),
            )));
        }
        self.category_repo.delete_category(id).await
    }
}
