pub mod contract;
mod error;
pub mod helpers;
pub mod msg;
pub mod pricing;
pub mod query;
pub mod royalties;
pub mod state;
pub mod supply;
pub mod treasury;

pub use crate::error::ContractError;
pub use crate::helpers::{CollectionContract, TokenLedger};
