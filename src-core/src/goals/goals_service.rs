use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{
    CreateGoal, FinancialGoal, GoalChangeset, GoalProgress, NewFinancialGoal, UpdateGoal,
    GOAL_TYPES,
};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::ledger::recurrence::month_bounds;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }

    /// Checks the combined shape of a goal: a category goal must name a
    /// category, the aggregate types must not.
    fn validate_shape(
        goal_type: &str,
        target_amount: f64,
        month: i32,
        category_id: Option<&str>,
    ) -> Result<()> {
        if !GOAL_TYPES.contains(&goal_type) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown goal type '{}'",
                goal_type
            ))));
        }
        if target_amount <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target amount must be greater than zero".to_string(),
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Month {} is out of range 1-12",
                month
            ))));
        }
        match (goal_type, category_id) {
            ("category", None) => Err(Error::Validation(ValidationError::MissingField(
                "categoryId".to_string(),
            ))),
            ("category", Some(_)) => Ok(()),
            (_, Some(_)) => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Goal type '{}' does not take a category",
                goal_type
            )))),
            (_, None) => Ok(()),
        }
    }

    fn progress_for(goal: &FinancialGoal, current_amount: f64) -> GoalProgress {
        let percentage = if goal.target_amount > 0.0 {
            current_amount / goal.target_amount * 100.0
        } else {
            0.0
        };
        GoalProgress {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            goal_type: goal.goal_type.clone(),
            target_amount: goal.target_amount,
            month: goal.month,
            year: goal.year,
            category_id: goal.category_id.clone(),
            current_amount,
            percentage,
        }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<FinancialGoal>> {
        self.goal_repo.load_goals()
    }

    fn get_goal(&self, id: &str) -> Result<Option<FinancialGoal>> {
        self.goal_repo.get_by_id(id)
    }

    fn get_progress(&self, month: i32, year: i32) -> Result<Vec<GoalProgress>> {
        let (first, last) = u32::try_from(month)
            .ok()
            .and_then(|m| month_bounds(year, m))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Invalid period {}/{}",
                    month, year
                )))
            })?;

        let goals = self.goal_repo.goals_for_period(month, year)?;
        let mut progress = Vec::with_capacity(goals.len());
        for goal in &goals {
            let current_amount = match goal.goal_type.as_str() {
                "income_total" => self.goal_repo.sum_receivables(first, last, None)?,
                "expense_total" => self.goal_repo.sum_payables(first, last, None)?,
                _ => {
                    let category = goal.category_id.as_deref();
                    self.goal_repo.sum_receivables(first, last, category)?
                        + self.goal_repo.sum_payables(first, last, category)?
                }
            };
            progress.push(Self::progress_for(goal, current_amount));
        }
        Ok(progress)
    }

    async fn create_goal(&self, input: CreateGoal) -> Result<FinancialGoal> {
        if input.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Self::validate_shape(
            &input.goal_type,
            input.target_amount,
            input.month,
            input.category_id.as_deref(),
        )?;

        let now = Utc::now().to_rfc3339();
        let new_goal = NewFinancialGoal {
            id: None,
            name: input.name,
            goal_type: input.goal_type,
            target_amount: input.target_amount,
            month: input.month,
            year: input.year,
            category_id: input.category_id,
            active: input.active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };
        self.goal_repo.insert(new_goal).await
    }

    async fn update_goal(&self, id: &str, input: UpdateGoal) -> Result<FinancialGoal> {
        let existing = self
            .goal_repo
            .get_by_id(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal with id '{}' not found", id)))?;

        // Validate the goal as it would look after the update.
        let goal_type = input
            .goal_type
            .clone()
            .unwrap_or_else(|| existing.goal_type.clone());
        let target_amount = input.target_amount.unwrap_or(existing.target_amount);
        let month = input.month.unwrap_or(existing.month);
        let category_id = match (&input.category_id, &input.goal_type) {
            (Some(category), _) => Some(category.clone()),
            // A switch away from the category type drops the old link.
            (None, Some(new_type)) if new_type != "category" => None,
            (None, _) => existing.category_id.clone(),
        };
        Self::validate_shape(&goal_type, target_amount, month, category_id.as_deref())?;

        let changes = GoalChangeset {
            name: input.name,
            goal_type: input.goal_type,
            target_amount: input.target_amount,
            month: input.month,
            year: input.year,
            category_id: if category_id != existing.category_id {
                Some(category_id)
            } else {
                None
            },
            active: input.active,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.goal_repo.update(id, changes).await
    }

    async fn delete_goal(&self, id: &str) -> Result<usize> {
        self.goal_repo.delete(id).await
    }
}
