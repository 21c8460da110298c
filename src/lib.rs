pub mod db;

pub mod accounts;
pub mod cash;
pub mod holdings;
pub mod market_data;
pub mod portfolio;
pub mod securities;
pub mod trades;

pub mod constants;
pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
