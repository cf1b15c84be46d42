use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for a financial goal
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::financial_goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: String,
    pub name: String,
    pub goal_type: String,
    pub target_amount: f64,
    pub month: i32,
    pub year: i32,
    pub category_id: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::financial_goals)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialGoal {
    pub id: Option<String>,
    pub name: String,
    pub goal_type: String,
    pub target_amount: f64,
    pub month: i32,
    pub year: i32,
    pub category_id: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated request payload for creating a goal
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateGoal {
    pub name: String,
    pub goal_type: String,
    pub target_amount: f64,
    pub month: i32,
    pub year: i32,
    pub category_id: Option<String>,
    pub active: Option<bool>,
}

/// Validated request payload for updating a goal
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateGoal {
    pub name: Option<String>,
    pub goal_type: Option<String>,
    pub target_amount: Option<f64>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub category_id: Option<String>,
    pub active: Option<bool>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::financial_goals)]
pub struct GoalChangeset {
    pub name: Option<String>,
    pub goal_type: Option<String>,
    pub target_amount: Option<f64>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub category_id: Option<Option<String>>,
    pub active: Option<bool>,
    pub updated_at: String,
}

/// Progress of one goal over its month, derived on every read and
/// never persisted.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub goal_type: String,
    pub target_amount: f64,
    pub month: i32,
    pub year: i32,
    pub category_id: Option<String>,
    pub current_amount: f64,
    /// current / target x 100, uncapped; 0 when the target is not positive.
    pub percentage: f64,
}

pub const GOAL_TYPES: [&str; 3] = ["income_total", "expense_total", "category"];
