use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for ledger categories
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
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub color: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub id: Option<String>,
    pub name: String,
    pub kind: String,
    pub color: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated request payload for creating a category
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCategory {
    pub name: String,
    pub kind: String,
    pub color: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChangeset {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
    pub updated_at: String,
}

pub const CATEGORY_KINDS: [&str; 2] = ["income", "expense"];

impl Category {
    pub fn is_expense(&self) -> bool {
        self.kind == "expense"
    }

    pub fn is_income(&self) -> bool {
        self.kind == "income"
    }
}
