//! Clause selection and numbering.

use serde::Serialize;

use super::template::{Clause, ContractTemplate};
use super::tokens::TokenTable;

/// A clause ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedClause {
    pub number: usize,
    /// Full heading, e.g. `CLÁUSULA 1ª - DO OBJETO`.
    pub heading: String,
    pub title: String,
    pub body: String,
}

/// Selects the clause list and numbers it from 1.
///
/// A non-empty override list replaces the template's clauses entirely.
/// Title and body are both run through token resolution.
pub fn assemble(
    template: &ContractTemplate,
    overrides: Option<&[Clause]>,
    tokens: &TokenTable,
) -> Vec<NumberedClause> {
    let source = match overrides {
        Some(list) if !list.is_empty() => list,
        _ => template.clauses.as_slice(),
    };

    source
        .iter()
        .enumerate()
        .map(|(index, clause)| {
            let number = index + 1;
            let title = tokens.resolve(&clause.title);
            NumberedClause {
                number,
                heading: heading(number, &title),
                title,
                body: tokens.resolve(&clause.content),
            }
        })
        .collect()
}

fn heading(number: usize, title: &str) -> String {
    format!("CLÁUSULA {}ª - {}", number, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{CompanyData, ContractData};
    use chrono::NaiveDate;

    fn tokens() -> TokenTable {
        let data = ContractData {
            work_title: Some("Aurora".to_string()),
            ..Default::default()
        };
        TokenTable::build(
            &data,
            &CompanyData::default_identity(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    fn template() -> ContractTemplate {
        ContractTemplate {
            name: "Contrato".to_string(),
            clauses: vec![
                Clause::new("Do Objeto", "Produção da obra {{work_title}}."),
                Clause::new("Do Prazo", "Vigência até {{end_date}}."),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn numbers_template_clauses_from_one() {
        let clauses = assemble(&template(), None, &tokens());
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].heading, "CLÁUSULA 1ª - Do Objeto");
        assert_eq!(clauses[1].heading, "CLÁUSULA 2ª - Do Prazo");
        assert_eq!(clauses[0].body, "Produção da obra Aurora.");
    }

    #[test]
    fn non_empty_overrides_replace_template_clauses() {
        let overrides = vec![Clause::new("Da Exclusividade {{work_title}}", "Texto.")];
        let clauses = assemble(&template(), Some(overrides.as_slice()), &tokens());
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].heading, "CLÁUSULA 1ª - Da Exclusividade Aurora");
    }

    #[test]
    fn empty_overrides_fall_back_to_template() {
        let clauses = assemble(&template(), Some(&[][..]), &tokens());
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn empty_clause_list_is_legal() {
        let empty = ContractTemplate::default();
        assert!(assemble(&empty, None, &tokens()).is_empty());
    }
}
