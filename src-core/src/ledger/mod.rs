pub mod ledger_model;
pub mod ledger_repository;
pub mod ledger_service;
pub mod ledger_traits;
pub mod recurrence;

pub use ledger_model::{
    AccountPayable, AccountReceivable, CreateAccountPayable, CreateAccountReceivable,
    UpdateAccountPayable, UpdateAccountReceivable,
};
pub use ledger_repository::LedgerRepository;
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
pub use recurrence::{month_bounds, occurrences, Recurrence};
