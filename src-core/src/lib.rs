pub mod cash_flow;
pub mod categories;
pub mod companies;
pub mod cost_centers;
pub mod db;
pub mod errors;
pub mod goals;
pub mod ledger;
pub mod notes;
pub mod partners;
pub mod schema;

pub use errors::{Error, Result};
