pub mod partners_model;
pub mod partners_repository;
pub mod partners_service;
pub mod partners_traits;

pub use partners_model::{CreatePartner, Customer, Supplier, UpdatePartner};
pub use partners_repository::PartnerRepository;
pub use partners_service::PartnerService;
pub use partners_traits::{PartnerRepositoryTrait, PartnerServiceTrait};
