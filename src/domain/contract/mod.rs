//! Contract domain: templates, per-contract data, parties, clauses.
//!
//! Everything here is pure. Renderers in `adapters::document` consume a
//! [`ContractAssembly`] built once per generation.

mod assembly;
mod clauses;
mod company;
mod data;
mod filename;
mod party;
mod template;
mod tokens;
pub mod wording;

pub use assembly::{ContractAssembly, GenerationContext};
pub use clauses::{assemble, NumberedClause};
pub use company::{CompanyData, CompanyOverride, RepresentativeData};
pub use data::ContractData;
pub use filename::contract_filename;
pub use party::{build_parties, normalize_type, Parties, PartyBlock, PartyStructure};
pub use template::{extract_image_reference, Clause, ContractTemplate, DefaultFields};
pub use tokens::TokenTable;
