//! One-shot resolution of everything both renderers need.

use chrono::NaiveDate;
use serde::Serialize;

use super::clauses::{assemble, NumberedClause};
use super::company::CompanyData;
use super::data::ContractData;
use super::party::{build_parties, Parties, PartyStructure};
use super::template::{Clause, ContractTemplate};
use super::tokens::TokenTable;
use super::wording::place_and_date;

/// Values injected per generation instead of read from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    /// Base issuer identity, before template overrides.
    pub company: CompanyData,
    pub today: NaiveDate,
}

impl GenerationContext {
    pub fn new(company: CompanyData, today: NaiveDate) -> Self {
        Self { company, today }
    }
}

/// A fully resolved contract.
///
/// Renderers only decide presentation; every piece of text they print comes
/// from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractAssembly {
    pub title: String,
    pub company: CompanyData,
    pub parties: Parties,
    pub clauses: Vec<NumberedClause>,
    /// `São Paulo, 1º de maio de 2024.`
    pub place_and_date: String,
    pub header_image: Option<String>,
    pub footer_image: Option<String>,
}

impl ContractAssembly {
    pub fn build(
        template: &ContractTemplate,
        data: &ContractData,
        overrides: Option<&[Clause]>,
        ctx: &GenerationContext,
    ) -> Self {
        let company = match template.company_override() {
            Some(overrides) => ctx.company.merged(overrides),
            None => ctx.company.clone(),
        };

        let tokens = TokenTable::build(data, &company, ctx.today);
        let structure = PartyStructure::classify(&template.template_type);
        let parties = build_parties(structure, data, &company);

        let title = tokens.resolve(data.title().unwrap_or(&template.name));
        let clauses = assemble(template, overrides, &tokens);

        Self {
            title,
            place_and_date: place_and_date(&company.city, ctx.today),
            company,
            parties,
            clauses,
            header_image: template.header_image(),
            footer_image: template.footer_image(),
        }
    }

    pub fn structure(&self) -> PartyStructure {
        self.parties.structure
    }
}
