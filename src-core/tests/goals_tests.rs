mod common;

use caixa_core::categories::{
    CategoryRepository, CategoryService, CategoryServiceTrait, CreateCategory,
};
use caixa_core::errors::Error;
use caixa_core::goals::goals_model::{CreateGoal, UpdateGoal};
use caixa_core::goals::goals_traits::GoalServiceTrait;
use caixa_core::goals::{GoalRepository, GoalService};
use caixa_core::ledger::ledger_model::{CreateAccountPayable, CreateAccountReceivable};
use caixa_core::ledger::ledger_traits::LedgerServiceTrait;
use caixa_core::ledger::{LedgerRepository, LedgerService};
use chrono::NaiveDate;
use std::sync::Arc;

struct Fixture {
    _dir: tempfile::TempDir,
    goals: GoalService<GoalRepository>,
    ledger: LedgerService<LedgerRepository>,
    categories: CategoryService<CategoryRepository>,
}

fn fixture() -> Fixture {
    let (dir, pool, writer) = common::setup_db();
    let goals = GoalService::new(Arc::new(GoalRepository::new(pool.clone(), writer.clone())));
    let ledger = LedgerService::new(Arc::new(LedgerRepository::new(
        pool.clone(),
        writer.clone(),
    )));
    let categories = CategoryService::new(Arc::new(CategoryRepository::new(pool, writer)));
    Fixture {
        _dir: dir,
        goals,
        ledger,
        categories,
    }
}

async fn add_category(fx: &Fixture, name: &str, kind: &str) -> String {
    fx.categories
        .create_category(CreateCategory {
            name: name.to_string(),
            kind: kind.to_string(),
            color: None,
        })
        .await
        .unwrap()
        .id
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(name: &str, goal_type: &str, target: f64, month: i32, year: i32) -> CreateGoal {
    CreateGoal {
        name: name.to_string(),
        goal_type: goal_type.to_string(),
        target_amount: target,
        month,
        year,
        category_id: None,
        active: None,
    }
}

async fn add_receivable(
    fx: &Fixture,
    amount: f64,
    due: NaiveDate,
    category_id: Option<&str>,
) {
    fx.ledger
        .create_receivable(CreateAccountReceivable {
            description: "Invoice".to_string(),
            amount,
            due_date: due,
            status: None,
            customer_id: None,
            category_id: category_id.map(str::to_string),
            payment_method: None,
            notes: None,
            recurrence: None,
            recurrence_end: None,
            company_id: None,
        })
        .await
        .unwrap();
}

async fn add_payable(fx: &Fixture, amount: f64, due: NaiveDate, category_id: Option<&str>) {
    fx.ledger
        .create_payable(CreateAccountPayable {
            description: "Bill".to_string(),
            amount,
            due_date: due,
            status: None,
            supplier_id: None,
            category_id: category_id.map(str::to_string),
            cost_center_id: None,
            payment_method: None,
            notes: None,
            recurrence: None,
            recurrence_end: None,
            company_id: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn income_goal_progress_sums_receivables_in_the_month() {
    let fx = fixture();

    add_receivable(&fx, 2000.0, date(2026, 7, 5), None).await;
    add_receivable(&fx, 1000.0, date(2026, 7, 15), None).await;
    add_receivable(&fx, 500.0, date(2026, 7, 28), None).await;
    // Outside the goal month, must not count.
    add_receivable(&fx, 9999.0, date(2026, 8, 1), None).await;

    fx.goals
        .create_goal(goal("July revenue", "income_total", 5000.0, 7, 2026))
        .await
        .unwrap();

    let progress = fx.goals.get_progress(7, 2026).unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].current_amount, 3500.0);
    assert_eq!(progress[0].percentage, 70.0);
}

#[tokio::test]
async fn expense_goal_progress_sums_payables_in_the_month() {
    let fx = fixture();

    add_payable(&fx, 800.0, date(2026, 3, 10), None).await;
    add_payable(&fx, 200.0, date(2026, 3, 20), None).await;
    add_receivable(&fx, 5000.0, date(2026, 3, 15), None).await;

    fx.goals
        .create_goal(goal("Cost ceiling", "expense_total", 2000.0, 3, 2026))
        .await
        .unwrap();

    let progress = fx.goals.get_progress(3, 2026).unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].current_amount, 1000.0);
    assert_eq!(progress[0].percentage, 50.0);
}

#[tokio::test]
async fn category_goal_sums_both_ledgers_for_its_category() {
    let fx = fixture();

    let marketing = add_category(&fx, "Marketing", "expense").await;
    let other = add_category(&fx, "Other", "expense").await;

    add_receivable(&fx, 1200.0, date(2026, 5, 3), Some(&marketing)).await;
    add_payable(&fx, 300.0, date(2026, 5, 9), Some(&marketing)).await;
    add_payable(&fx, 999.0, date(2026, 5, 9), Some(&other)).await;
    add_receivable(&fx, 999.0, date(2026, 5, 9), None).await;

    let mut input = goal("Marketing", "category", 3000.0, 5, 2026);
    input.category_id = Some(marketing);
    fx.goals.create_goal(input).await.unwrap();

    let progress = fx.goals.get_progress(5, 2026).unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].current_amount, 1500.0);
    assert_eq!(progress[0].percentage, 50.0);
}

#[tokio::test]
async fn category_goal_with_no_matching_entries_reports_zero() {
    let fx = fixture();

    let unused = add_category(&fx, "Unused", "income").await;
    let mut input = goal("Dormant", "category", 1000.0, 9, 2026);
    input.category_id = Some(unused);
    fx.goals.create_goal(input).await.unwrap();

    let progress = fx.goals.get_progress(9, 2026).unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].current_amount, 0.0);
    assert_eq!(progress[0].percentage, 0.0);
}

#[tokio::test]
async fn progress_is_recomputed_on_every_read() {
    let fx = fixture();

    fx.goals
        .create_goal(goal("Revenue", "income_total", 1000.0, 6, 2026))
        .await
        .unwrap();

    let before = fx.goals.get_progress(6, 2026).unwrap();
    assert_eq!(before[0].current_amount, 0.0);

    add_receivable(&fx, 400.0, date(2026, 6, 12), None).await;

    let after = fx.goals.get_progress(6, 2026).unwrap();
    assert_eq!(after[0].current_amount, 400.0);
    assert_eq!(after[0].percentage, 40.0);

    // Reads have no side effects, a second read sees the same numbers.
    let again = fx.goals.get_progress(6, 2026).unwrap();
    assert_eq!(after, again);
}

#[tokio::test]
async fn uncapped_percentage_can_exceed_one_hundred() {
    let fx = fixture();

    add_receivable(&fx, 1500.0, date(2026, 2, 10), None).await;
    fx.goals
        .create_goal(goal("Stretch", "income_total", 1000.0, 2, 2026))
        .await
        .unwrap();

    let progress = fx.goals.get_progress(2, 2026).unwrap();
    assert_eq!(progress[0].percentage, 150.0);
}

#[tokio::test]
async fn only_active_goals_for_the_exact_period_are_reported() {
    let fx = fixture();

    fx.goals
        .create_goal(goal("This month", "income_total", 100.0, 4, 2026))
        .await
        .unwrap();
    fx.goals
        .create_goal(goal("Other month", "income_total", 100.0, 5, 2026))
        .await
        .unwrap();
    fx.goals
        .create_goal(goal("Other year", "income_total", 100.0, 4, 2027))
        .await
        .unwrap();

    let mut inactive = goal("Paused", "income_total", 100.0, 4, 2026);
    inactive.active = Some(false);
    fx.goals.create_goal(inactive).await.unwrap();

    let progress = fx.goals.get_progress(4, 2026).unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].name, "This month");
}

#[tokio::test]
async fn goal_validation_rejects_malformed_inputs() {
    let fx = fixture();

    // Category goals need a category.
    assert!(matches!(
        fx.goals
            .create_goal(goal("No category", "category", 100.0, 1, 2026))
            .await,
        Err(Error::Validation(_))
    ));

    // Aggregate goals must not carry one.
    let mut with_category = goal("Misplaced", "income_total", 100.0, 1, 2026);
    with_category.category_id = Some("cat-1".to_string());
    assert!(matches!(
        fx.goals.create_goal(with_category).await,
        Err(Error::Validation(_))
    ));

    assert!(matches!(
        fx.goals
            .create_goal(goal("Bad month", "income_total", 100.0, 13, 2026))
            .await,
        Err(Error::Validation(_))
    ));

    assert!(matches!(
        fx.goals
            .create_goal(goal("Bad target", "income_total", 0.0, 1, 2026))
            .await,
        Err(Error::Validation(_))
    ));

    assert!(matches!(
        fx.goals
            .create_goal(goal("Bad type", "savings", 100.0, 1, 2026))
            .await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn category_goal_pointing_at_an_unknown_category_is_not_found() {
    let fx = fixture();

    let mut input = goal("Ghost", "category", 100.0, 1, 2026);
    input.category_id = Some("no-such-category".to_string());
    assert!(matches!(
        fx.goals.create_goal(input).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn switching_away_from_a_category_goal_drops_the_category_link() {
    let fx = fixture();

    let marketing = add_category(&fx, "Marketing", "expense").await;
    let mut input = goal("Marketing", "category", 500.0, 8, 2026);
    input.category_id = Some(marketing);
    let created = fx.goals.create_goal(input).await.unwrap();

    let updated = fx
        .goals
        .update_goal(
            &created.id,
            UpdateGoal {
                name: None,
                goal_type: Some("expense_total".to_string()),
                target_amount: None,
                month: None,
                year: None,
                category_id: None,
                active: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.goal_type, "expense_total");
    assert!(updated.category_id.is_none());
}

#[tokio::test]
async fn updating_a_missing_goal_is_not_found() {
    let fx = fixture();

    let result = fx
        .goals
        .update_goal(
            "missing",
            UpdateGoal {
                name: Some("x".to_string()),
                goal_type: None,
                target_amount: None,
                month: None,
                year: None,
                category_id: None,
                active: None,
            },
        )
        .await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}
