//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod generate_contract;

pub use generate_contract::{
    GenerateContractCommand, GenerateContractError, GenerateContractHandler, StoredContract,
};
