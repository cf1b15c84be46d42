mod common;

use caixa_core::cash_flow::cash_flow_model::CreateCashFlowEntry;
use caixa_core::cash_flow::cash_flow_traits::CashFlowServiceTrait;
use caixa_core::cash_flow::{CashFlowRepository, CashFlowService};
use caixa_core::categories::categories_model::CreateCategory;
use caixa_core::categories::categories_traits::CategoryServiceTrait;
use caixa_core::categories::{CategoryRepository, CategoryService};
use caixa_core::companies::companies_model::{CreateCompany, UpdateCompany};
use caixa_core::companies::companies_traits::CompanyServiceTrait;
use caixa_core::companies::{CompanyRepository, CompanyService};
use caixa_core::cost_centers::cost_centers_model::CreateCostCenter;
use caixa_core::cost_centers::cost_centers_traits::CostCenterServiceTrait;
use caixa_core::cost_centers::{CostCenterRepository, CostCenterService};
use caixa_core::errors::Error;
use caixa_core::ledger::ledger_model::CreateAccountPayable;
use caixa_core::ledger::ledger_traits::LedgerServiceTrait;
use caixa_core::ledger::{LedgerRepository, LedgerService};
use caixa_core::notes::notes_model::{CreateNote, UpdateNote};
use caixa_core::notes::notes_traits::NoteServiceTrait;
use caixa_core::notes::{NoteRepository, NoteService};
use caixa_core::partners::partners_model::{CreatePartner, UpdatePartner};
use caixa_core::partners::partners_traits::PartnerServiceTrait;
use caixa_core::partners::{PartnerRepository, PartnerService};
use chrono::NaiveDate;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn company(name: &str, tax_id: &str) -> CreateCompany {
    CreateCompany {
        name: name.to_string(),
        legal_name: format!("{} Ltda", name),
        tax_id: tax_id.to_string(),
        email: None,
        phone: None,
        address: None,
        status: None,
    }
}

fn partner(name: &str) -> CreatePartner {
    CreatePartner {
        name: name.to_string(),
        tax_id: None,
        email: None,
        phone: None,
        notes: None,
        active: None,
    }
}

fn payable_for(supplier_id: Option<&str>, category_id: Option<&str>) -> CreateAccountPayable {
    CreateAccountPayable {
        description: "Bill".to_string(),
        amount: 100.0,
        due_date: date(2026, 6, 1),
        status: None,
        supplier_id: supplier_id.map(str::to_string),
        category_id: category_id.map(str::to_string),
        cost_center_id: None,
        payment_method: None,
        notes: None,
        recurrence: None,
        recurrence_end: None,
        company_id: None,
    }
}

#[tokio::test]
async fn duplicate_tax_id_is_a_conflict() {
    let (_dir, pool, writer) = common::setup_db();
    let service = CompanyService::new(Arc::new(CompanyRepository::new(pool, writer)));

    service
        .create_company(company("Padaria Central", "11.222.333/0001-44"))
        .await
        .unwrap();

    let duplicate = service
        .create_company(company("Outra Padaria", "11.222.333/0001-44"))
        .await;
    assert!(matches!(duplicate, Err(Error::Conflict(_))));
}

#[tokio::test]
async fn company_update_keeps_its_own_tax_id_without_conflict() {
    let (_dir, pool, writer) = common::setup_db();
    let service = CompanyService::new(Arc::new(CompanyRepository::new(pool, writer)));

    let created = service
        .create_company(company("Mercearia", "99.888.777/0001-00"))
        .await
        .unwrap();
    let other = service
        .create_company(company("Quitanda", "55.444.333/0001-11"))
        .await
        .unwrap();

    // Re-sending its own tax id is fine.
    let same = service
        .update_company(
            &created.id,
            UpdateCompany {
                name: Some("Mercearia Nova".to_string()),
                legal_name: None,
                tax_id: Some("99.888.777/0001-00".to_string()),
                email: None,
                phone: None,
                address: None,
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(same.name, "Mercearia Nova");

    // Taking another company's tax id is not.
    let stolen = service
        .update_company(
            &other.id,
            UpdateCompany {
                name: None,
                legal_name: None,
                tax_id: Some("99.888.777/0001-00".to_string()),
                email: None,
                phone: None,
                address: None,
                status: None,
            },
        )
        .await;
    assert!(matches!(stolen, Err(Error::Conflict(_))));
}

#[tokio::test]
async fn referenced_supplier_cannot_be_deleted() {
    let (_dir, pool, writer) = common::setup_db();
    let partners = PartnerService::new(Arc::new(PartnerRepository::new(
        pool.clone(),
        writer.clone(),
    )));
    let ledger = LedgerService::new(Arc::new(LedgerRepository::new(pool, writer)));

    let supplier = partners.create_supplier(partner("Distribuidora")).await.unwrap();
    ledger
        .create_payable(payable_for(Some(&supplier.id), None))
        .await
        .unwrap();

    assert!(matches!(
        partners.delete_supplier(&supplier.id).await,
        Err(Error::Validation(_))
    ));

    let unused = partners.create_supplier(partner("Sem uso")).await.unwrap();
    assert_eq!(partners.delete_supplier(&unused.id).await.unwrap(), 1);
}

#[tokio::test]
async fn partner_update_and_listing_work_for_both_kinds() {
    let (_dir, pool, writer) = common::setup_db();
    let partners = PartnerService::new(Arc::new(PartnerRepository::new(pool, writer)));

    let customer = partners.create_customer(partner("Cliente A")).await.unwrap();
    assert!(customer.active);

    let updated = partners
        .update_customer(
            &customer.id,
            UpdatePartner {
                name: None,
                tax_id: None,
                email: Some("a@cliente.com".to_string()),
                phone: None,
                notes: None,
                active: Some(false),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email.as_deref(), Some("a@cliente.com"));
    assert!(!updated.active);

    partners.create_supplier(partner("Fornecedor B")).await.unwrap();
    assert_eq!(partners.get_customers().unwrap().len(), 1);
    assert_eq!(partners.get_suppliers().unwrap().len(), 1);
}

#[tokio::test]
async fn referenced_category_cannot_be_deleted() {
    let (_dir, pool, writer) = common::setup_db();
    let categories = CategoryService::new(Arc::new(CategoryRepository::new(
        pool.clone(),
        writer.clone(),
    )));
    let ledger = LedgerService::new(Arc::new(LedgerRepository::new(pool, writer)));

    let category = categories
        .create_category(CreateCategory {
            name: "Fornecedores".to_string(),
            kind: "expense".to_string(),
            color: None,
        })
        .await
        .unwrap();

    ledger
        .create_payable(payable_for(None, Some(&category.id)))
        .await
        .unwrap();

    assert!(matches!(
        categories.delete_category(&category.id).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn category_kind_is_validated() {
    let (_dir, pool, writer) = common::setup_db();
    let categories = CategoryService::new(Arc::new(CategoryRepository::new(pool, writer)));

    let bad_kind = categories
        .create_category(CreateCategory {
            name: "Outros".to_string(),
            kind: "transfer".to_string(),
            color: None,
        })
        .await;
    assert!(matches!(bad_kind, Err(Error::Validation(_))));
}

#[tokio::test]
async fn cost_center_with_entries_cannot_be_deleted() {
    let (_dir, pool, writer) = common::setup_db();
    let cost_centers = CostCenterService::new(Arc::new(CostCenterRepository::new(
        pool.clone(),
        writer.clone(),
    )));
    let ledger = LedgerService::new(Arc::new(LedgerRepository::new(pool, writer)));

    let center = cost_centers
        .create_cost_center(CreateCostCenter {
            name: "Loja 1".to_string(),
            description: None,
            active: None,
        })
        .await
        .unwrap();

    let mut input = payable_for(None, None);
    input.cost_center_id = Some(center.id.clone());
    ledger.create_payable(input).await.unwrap();

    assert!(matches!(
        cost_centers.delete_cost_center(&center.id).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn monthly_summary_nets_income_against_expense() {
    let (_dir, pool, writer) = common::setup_db();
    let cash_flow = CashFlowService::new(Arc::new(CashFlowRepository::new(pool, writer)));

    let entry = |kind: &str, amount: f64, day: u32| CreateCashFlowEntry {
        kind: kind.to_string(),
        description: "Movimento".to_string(),
        amount,
        entry_date: date(2026, 6, day),
        category_id: None,
        company_id: None,
    };

    cash_flow.create_entry(entry("income", 2000.0, 2)).await.unwrap();
    cash_flow.create_entry(entry("income", 500.0, 15)).await.unwrap();
    cash_flow.create_entry(entry("expense", 800.0, 20)).await.unwrap();

    // Next month, must not count.
    let mut july = entry("income", 9999.0, 1);
    july.entry_date = date(2026, 7, 1);
    cash_flow.create_entry(july).await.unwrap();

    let summary = cash_flow.monthly_summary(2026, 6).unwrap();
    assert_eq!(summary.income_total, 2500.0);
    assert_eq!(summary.expense_total, 800.0);
    assert_eq!(summary.net_total, 1700.0);

    assert!(cash_flow.monthly_summary(2026, 0).is_err());
}

#[tokio::test]
async fn cash_flow_rejects_unknown_kinds_and_filters_by_period() {
    let (_dir, pool, writer) = common::setup_db();
    let cash_flow = CashFlowService::new(Arc::new(CashFlowRepository::new(pool, writer)));

    let bad = cash_flow
        .create_entry(CreateCashFlowEntry {
            kind: "transfer".to_string(),
            description: "x".to_string(),
            amount: 10.0,
            entry_date: date(2026, 6, 1),
            category_id: None,
            company_id: None,
        })
        .await;
    assert!(matches!(bad, Err(Error::Validation(_))));

    cash_flow
        .create_entry(CreateCashFlowEntry {
            kind: "income".to_string(),
            description: "Venda".to_string(),
            amount: 10.0,
            entry_date: date(2026, 6, 1),
            category_id: None,
            company_id: None,
        })
        .await
        .unwrap();

    assert_eq!(cash_flow.get_entries(Some((2026, 6))).unwrap().len(), 1);
    assert_eq!(cash_flow.get_entries(Some((2026, 5))).unwrap().len(), 0);
}

#[tokio::test]
async fn notes_support_the_full_crud_cycle() {
    let (_dir, pool, writer) = common::setup_db();
    let notes = NoteService::new(Arc::new(NoteRepository::new(pool, writer)));

    let note = notes
        .create_note(CreateNote {
            title: "Lembrete".to_string(),
            content: "Pagar aluguel dia 5".to_string(),
            color: Some("#ffcc00".to_string()),
        })
        .await
        .unwrap();

    let updated = notes
        .update_note(
            &note.id,
            UpdateNote {
                title: None,
                content: Some("Pagar aluguel dia 10".to_string()),
                color: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.content, "Pagar aluguel dia 10");
    assert_eq!(updated.title, "Lembrete");

    assert_eq!(notes.get_notes().unwrap().len(), 1);
    assert_eq!(notes.delete_note(&note.id).await.unwrap(), 1);
    assert!(notes.get_note(&note.id).unwrap().is_none());

    let blank = notes
        .create_note(CreateNote {
            title: " ".to_string(),
            content: "x".to_string(),
            color: None,
        })
        .await;
    assert!(matches!(blank, Err(Error::Validation(_))));
}
