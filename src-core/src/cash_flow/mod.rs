pub mod cash_flow_model;
pub mod cash_flow_repository;
pub mod cash_flow_service;
pub mod cash_flow_traits;

pub use cash_flow_model::{CashFlowEntry, CreateCashFlowEntry, MonthlySummary};
pub use cash_flow_repository::CashFlowRepository;
pub use cash_flow_service::CashFlowService;
pub use cash_flow_traits::{CashFlowRepositoryTrait, CashFlowServiceTrait};
