pub mod companies_model;
pub mod companies_repository;
pub mod companies_service;
pub mod companies_traits;

pub use companies_model::{Company, CreateCompany, NewCompany, UpdateCompany};
pub use companies_repository::CompanyRepository;
pub use companies_service::CompanyService;
pub use companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};
