use std::sync::Arc;

use crate::{auth::AuthManager, config::Config};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use caixa_core::{
    cash_flow::{CashFlowRepository, CashFlowService, CashFlowServiceTrait},
    categories::{CategoryRepository, CategoryService, CategoryServiceTrait},
    companies::{CompanyRepository, CompanyService, CompanyServiceTrait},
    cost_centers::{CostCenterRepository, CostCenterService, CostCenterServiceTrait},
    db::{self, write_actor},
    goals::{GoalRepository, GoalService, GoalServiceTrait},
    ledger::{LedgerRepository, LedgerService, LedgerServiceTrait},
    notes::{NoteRepository, NoteService, NoteServiceTrait},
    partners::{PartnerRepository, PartnerService, PartnerServiceTrait},
};

pub struct AppState {
    pub company_service: Arc<dyn CompanyServiceTrait + Send + Sync>,
    pub partner_service: Arc<dyn PartnerServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub cost_center_service: Arc<dyn CostCenterServiceTrait + Send + Sync>,
    pub ledger_service: Arc<dyn LedgerServiceTrait + Send + Sync>,
    pub cash_flow_service: Arc<dyn CashFlowServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub note_service: Arc<dyn NoteServiceTrait + Send + Sync>,
    pub auth: Option<Arc<AuthManager>>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let company_repo = Arc::new(CompanyRepository::new(pool.clone(), writer.clone()));
    let partner_repo = Arc::new(PartnerRepository::new(pool.clone(), writer.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let cost_center_repo = Arc::new(CostCenterRepository::new(pool.clone(), writer.clone()));
    let ledger_repo = Arc::new(LedgerRepository::new(pool.clone(), writer.clone()));
    let cash_flow_repo = Arc::new(CashFlowRepository::new(pool.clone(), writer.clone()));
    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let note_repo = Arc::new(NoteRepository::new(pool, writer));

    let auth = config
        .jwt_secret
        .as_deref()
        .map(AuthManager::new)
        .map(Arc::new);
    if auth.is_none() {
        tracing::warn!("CAIXA_JWT_SECRET is not set, the API runs without authentication");
    }

    Ok(Arc::new(AppState {
        company_service: Arc::new(CompanyService::new(company_repo)),
        partner_service: Arc::new(PartnerService::new(partner_repo)),
        category_service: Arc::new(CategoryService::new(category_repo)),
        cost_center_service: Arc::new(CostCenterService::new(cost_center_repo)),
        ledger_service: Arc::new(LedgerService::new(ledger_repo)),
        cash_flow_service: Arc::new(CashFlowService::new(cash_flow_repo)),
        goal_service: Arc::new(GoalService::new(goal_repo)),
        note_service: Arc::new(NoteService::new(note_repo)),
        auth,
    }))
}
