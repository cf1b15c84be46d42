use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for cost centers
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
#[diesel(table_name = crate::schema::cost_centers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CostCenter {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::cost_centers)]
#[serde(rename_all = "camelCase")]
pub struct NewCostCenter {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCostCenter {
    pub name: String,
    pub description: Option<String>,
    pub active: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCostCenter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::cost_centers)]
pub struct CostCenterChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub updated_at: String,
}
