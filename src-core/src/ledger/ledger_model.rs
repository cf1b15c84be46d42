use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for an accounts-payable entry
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
#[diesel(table_name = crate::schema::accounts_payable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountPayable {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: String,
    pub supplier_id: Option<String>,
    pub category_id: Option<String>,
    pub cost_center_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub recurrence: String,
    pub recurrence_end: Option<NaiveDate>,
    pub company_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for an accounts-receivable entry
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
#[diesel(table_name = crate::schema::accounts_receivable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountReceivable {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: String,
    pub customer_id: Option<String>,
    pub category_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub recurrence: String,
    pub recurrence_end: Option<NaiveDate>,
    pub company_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts_payable)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountPayable {
    pub id: Option<String>,
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: String,
    pub supplier_id: Option<String>,
    pub category_id: Option<String>,
    pub cost_center_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub recurrence: String,
    pub recurrence_end: Option<NaiveDate>,
    pub company_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts_receivable)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountReceivable {
    pub id: Option<String>,
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: String,
    pub customer_id: Option<String>,
    pub category_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub recurrence: String,
    pub recurrence_end: Option<NaiveDate>,
    pub company_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated request payload for creating a payable entry.
/// When `recurrence` is set and `recurrenceEnd` lies on or after the due
/// date, the service expands the payload into one row per occurrence.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAccountPayable {
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: Option<String>,
    pub supplier_id: Option<String>,
    pub category_id: Option<String>,
    pub cost_center_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub recurrence: Option<String>,
    pub recurrence_end: Option<NaiveDate>,
    pub company_id: Option<String>,
}

/// Validated request payload for creating a receivable entry
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAccountReceivable {
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: Option<String>,
    pub customer_id: Option<String>,
    pub category_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub recurrence: Option<String>,
    pub recurrence_end: Option<NaiveDate>,
    pub company_id: Option<String>,
}

/// Update payload; recurrence fields are editable but the series is never
/// re-expanded, each generated row stands on its own once created.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAccountPayable {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub supplier_id: Option<String>,
    pub category_id: Option<String>,
    pub cost_center_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub company_id: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAccountReceivable {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub customer_id: Option<String>,
    pub category_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub company_id: Option<String>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts_payable)]
pub struct PayableChangeset {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub supplier_id: Option<String>,
    pub category_id: Option<String>,
    pub cost_center_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub company_id: Option<String>,
    pub updated_at: String,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts_receivable)]
pub struct ReceivableChangeset {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub customer_id: Option<String>,
    pub category_id: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub company_id: Option<String>,
    pub updated_at: String,
}

pub const ENTRY_STATUSES: [&str; 3] = ["pending", "paid", "overdue"];
