mod common;

use caixa_core::errors::Error;
use caixa_core::ledger::ledger_model::{
    CreateAccountPayable, CreateAccountReceivable, UpdateAccountPayable,
};
use caixa_core::ledger::ledger_traits::LedgerServiceTrait;
use caixa_core::ledger::{LedgerRepository, LedgerService};
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn payable(description: &str, amount: f64, due: NaiveDate) -> CreateAccountPayable {
    CreateAccountPayable {
        description: description.to_string(),
        amount,
        due_date: due,
        status: None,
        supplier_id: None,
        category_id: None,
        cost_center_id: None,
        payment_method: None,
        notes: None,
        recurrence: None,
        recurrence_end: None,
        company_id: None,
    }
}

fn receivable(description: &str, amount: f64, due: NaiveDate) -> CreateAccountReceivable {
    CreateAccountReceivable {
        description: description.to_string(),
        amount,
        due_date: due,
        status: None,
        customer_id: None,
        category_id: None,
        payment_method: None,
        notes: None,
        recurrence: None,
        recurrence_end: None,
        company_id: None,
    }
}

fn service(
    pool: Arc<caixa_core::db::DbPool>,
    writer: caixa_core::db::WriteHandle,
) -> LedgerService<LedgerRepository> {
    LedgerService::new(Arc::new(LedgerRepository::new(pool, writer)))
}

#[tokio::test]
async fn monthly_recurrence_generates_one_row_per_month() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let mut input = payable("Office rent", 1200.0, date(2026, 1, 25));
    input.recurrence = Some("monthly".to_string());
    input.recurrence_end = Some(date(2026, 12, 25));

    let base = service.create_payable(input).await.unwrap();
    assert_eq!(base.due_date, date(2026, 1, 25));
    assert_eq!(base.recurrence, "monthly");

    let rows = service.get_payables(None).unwrap();
    assert_eq!(rows.len(), 12);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.due_date.month(), i as u32 + 1);
        assert_eq!(row.due_date.day(), 25);
        assert_eq!(row.amount, 1200.0);
        assert_eq!(row.status, "pending");
    }
    assert_eq!(rows[0].id, base.id);
}

#[tokio::test]
async fn no_recurrence_creates_a_single_row_even_with_an_end_date() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let mut input = payable("One-off invoice", 300.0, date(2026, 1, 25));
    input.recurrence_end = Some(date(2026, 12, 25));

    service.create_payable(input).await.unwrap();
    assert_eq!(service.get_payables(None).unwrap().len(), 1);
}

#[tokio::test]
async fn end_date_before_due_date_creates_a_single_row() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let mut input = payable("Backdated end", 300.0, date(2026, 5, 10));
    input.recurrence = Some("monthly".to_string());
    input.recurrence_end = Some(date(2026, 4, 10));

    service.create_payable(input).await.unwrap();
    assert_eq!(service.get_payables(None).unwrap().len(), 1);
}

#[tokio::test]
async fn period_filter_limits_the_listing_to_one_month() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let mut input = payable("Subscription", 49.9, date(2026, 1, 15));
    input.recurrence = Some("monthly".to_string());
    input.recurrence_end = Some(date(2026, 6, 15));
    service.create_payable(input).await.unwrap();

    let march = service.get_payables(Some((2026, 3))).unwrap();
    assert_eq!(march.len(), 1);
    assert_eq!(march[0].due_date, date(2026, 3, 15));

    assert!(service.get_payables(Some((2026, 13))).is_err());
}

#[tokio::test]
async fn rejects_invalid_create_payloads() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let zero_amount = payable("Free lunch", 0.0, date(2026, 2, 1));
    assert!(matches!(
        service.create_payable(zero_amount).await,
        Err(Error::Validation(_))
    ));

    let blank = payable("   ", 10.0, date(2026, 2, 1));
    assert!(matches!(
        service.create_payable(blank).await,
        Err(Error::Validation(_))
    ));

    let mut bad_recurrence = payable("Retainer", 10.0, date(2026, 2, 1));
    bad_recurrence.recurrence = Some("biweekly".to_string());
    assert!(matches!(
        service.create_payable(bad_recurrence).await,
        Err(Error::Validation(_))
    ));

    let mut bad_status = payable("Retainer", 10.0, date(2026, 2, 1));
    bad_status.status = Some("unpaid".to_string());
    assert!(matches!(
        service.create_payable(bad_status).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn set_status_marks_an_entry_paid() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let entry = service
        .create_payable(payable("Utility bill", 180.0, date(2026, 3, 5)))
        .await
        .unwrap();

    let paid = service.set_payable_status(&entry.id, "paid").await.unwrap();
    assert_eq!(paid.status, "paid");
    assert_eq!(paid.amount, 180.0);

    assert!(matches!(
        service.set_payable_status(&entry.id, "cancelled").await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn update_touches_only_the_supplied_fields() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let entry = service
        .create_payable(payable("Hosting", 90.0, date(2026, 4, 1)))
        .await
        .unwrap();

    let changes = UpdateAccountPayable {
        description: Some("Hosting (annual)".to_string()),
        amount: None,
        due_date: None,
        status: None,
        supplier_id: None,
        category_id: None,
        cost_center_id: None,
        payment_method: None,
        notes: None,
        company_id: None,
    };
    let updated = service.update_payable(&entry.id, changes).await.unwrap();
    assert_eq!(updated.description, "Hosting (annual)");
    assert_eq!(updated.amount, 90.0);
    assert_eq!(updated.due_date, date(2026, 4, 1));
}

#[tokio::test]
async fn deleting_one_generated_row_leaves_the_rest() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let mut input = payable("Lease", 700.0, date(2026, 1, 10));
    input.recurrence = Some("quarterly".to_string());
    input.recurrence_end = Some(date(2026, 12, 31));
    service.create_payable(input).await.unwrap();

    let rows = service.get_payables(None).unwrap();
    assert_eq!(rows.len(), 4);

    let deleted = service.delete_payable(&rows[1].id).await.unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(service.get_payables(None).unwrap().len(), 3);
}

#[tokio::test]
async fn receivable_series_expands_like_payables() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    let mut input = receivable("Consulting retainer", 2500.0, date(2026, 2, 28));
    input.recurrence = Some("monthly".to_string());
    input.recurrence_end = Some(date(2026, 5, 31));

    let base = service.create_receivable(input).await.unwrap();
    assert_eq!(base.due_date, date(2026, 2, 28));

    let rows = service.get_receivables(None).unwrap();
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.due_date).collect();
    assert_eq!(
        dates,
        vec![
            date(2026, 2, 28),
            date(2026, 3, 28),
            date(2026, 4, 28),
            date(2026, 5, 28),
        ]
    );
}

#[tokio::test]
async fn get_by_id_returns_none_for_unknown_entries() {
    let (_dir, pool, writer) = common::setup_db();
    let service = service(pool, writer);

    assert!(service.get_payable("missing").unwrap().is_none());
    assert!(service.get_receivable("missing").unwrap().is_none());
}
