pub mod cost_centers_model;
pub mod cost_centers_repository;
pub mod cost_centers_service;
pub mod cost_centers_traits;

pub use cost_centers_model::{CostCenter, CreateCostCenter, NewCostCenter, UpdateCostCenter};
pub use cost_centers_repository::CostCenterRepository;
pub use cost_centers_service::CostCenterService;
pub use cost_centers_traits::{CostCenterRepositoryTrait, CostCenterServiceTrait};
