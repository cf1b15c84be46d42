use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for a cash-flow entry. Entries are an append-only
/// journal, they carry no updated_at column.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_flow_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntry {
    pub id: String,
    pub kind: String,
    pub description: String,
    pub amount: f64,
    pub entry_date: NaiveDate,
    pub category_id: Option<String>,
    pub company_id: Option<String>,
    pub created_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_flow_entries)]
#[serde(rename_all = "camelCase")]
pub struct NewCashFlowEntry {
    pub id: Option<String>,
    pub kind: String,
    pub description: String,
    pub amount: f64,
    pub entry_date: NaiveDate,
    pub category_id: Option<String>,
    pub company_id: Option<String>,
    pub created_at: String,
}

/// Validated request payload for recording a cash-flow entry
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCashFlowEntry {
    pub kind: String,
    pub description: String,
    pub amount: f64,
    pub entry_date: NaiveDate,
    pub category_id: Option<String>,
    pub company_id: Option<String>,
}

/// Income, expense and net totals for one calendar month
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: u32,
    pub year: i32,
    pub income_total: f64,
    pub expense_total: f64,
    pub net_total: f64,
}

pub const CASH_FLOW_KINDS: [&str; 2] = ["income", "expense"];
