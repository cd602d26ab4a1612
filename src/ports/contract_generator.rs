//! Contract Generator Ports - Rendering interfaces for both output forms.
//!
//! The markup form is a pure string build. The paginated form is async
//! because it may fetch banner images before laying out pages.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contract::{
    Clause, ContractAssembly, ContractData, ContractTemplate, GenerationContext,
};
use crate::domain::foundation::ValidationError;
use crate::domain::layout::PaginatedDocument;

/// Everything one generation call needs, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct ContractRequest<'a> {
    pub template: &'a ContractTemplate,
    pub data: &'a ContractData,
    /// A non-empty list replaces the template's clauses.
    pub overrides: Option<&'a [Clause]>,
    pub context: &'a GenerationContext,
}

impl<'a> ContractRequest<'a> {
    pub fn new(
        template: &'a ContractTemplate,
        data: &'a ContractData,
        overrides: Option<&'a [Clause]>,
        context: &'a GenerationContext,
    ) -> Self {
        Self {
            template,
            data,
            overrides,
            context,
        }
    }

    /// Checks the template and data before anything is rendered.
    pub fn validate(&self) -> Result<(), DocumentError> {
        self.template.validate()?;
        self.data.validate()?;
        Ok(())
    }

    /// Resolves title, parties and clauses.
    pub fn assemble(&self) -> ContractAssembly {
        ContractAssembly::build(self.template, self.data, self.overrides, self.context)
    }
}

/// Port for rendering a contract as a standalone markup document.
///
/// # Contract
///
/// Implementations must:
/// - Be pure: no network or file I/O
/// - Produce byte-identical output for identical requests
/// - Escape all interpolated text
pub trait ContractGenerator: Send + Sync {
    /// Renders the complete document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidInput` when the template or data fail
    /// validation. Missing data never fails rendering.
    fn render(&self, request: &ContractRequest<'_>) -> Result<String, DocumentError>;
}

/// Port for rendering a contract into fixed-size pages.
///
/// # Contract
///
/// Implementations must:
/// - Stamp exactly one header and one footer on every page
/// - Never drop or overlap body lines across page breaks
/// - Degrade to text banners when a banner image cannot be loaded
#[async_trait]
pub trait PaginatedContractGenerator: Send + Sync {
    async fn render_paginated(
        &self,
        request: &ContractRequest<'_>,
    ) -> Result<PaginatedDocument, DocumentError>;
}

/// Errors that can occur during contract rendering.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// Template or data rejected before rendering.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::CompanyData;
    use chrono::NaiveDate;

    #[test]
    fn request_assembles_with_overrides() {
        let template = ContractTemplate {
            name: "Contrato".to_string(),
            clauses: vec![Clause::new("A", "a"), Clause::new("B", "b")],
            ..Default::default()
        };
        let overrides = vec![Clause::new("Única", "texto")];
        let data = ContractData::default();
        let ctx = GenerationContext::new(
            CompanyData::default_identity(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );

        let request = ContractRequest::new(&template, &data, Some(overrides.as_slice()), &ctx);
        let assembly = request.assemble();
        assert_eq!(assembly.clauses.len(), 1);
        assert_eq!(assembly.clauses[0].heading, "CLÁUSULA 1ª - Única");
    }

    #[test]
    fn validate_reports_template_and_data_problems() {
        let ctx = GenerationContext::new(
            CompanyData::default_identity(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        let named = ContractTemplate {
            name: "Contrato".to_string(),
            ..Default::default()
        };
        let unnamed = ContractTemplate::default();
        let data = ContractData::default();
        let bad_data = ContractData {
            royalties_percentage: Some(-1.0),
            ..Default::default()
        };

        assert!(ContractRequest::new(&named, &data, None, &ctx).validate().is_ok());
        assert!(matches!(
            ContractRequest::new(&unnamed, &data, None, &ctx).validate(),
            Err(DocumentError::InvalidInput(_))
        ));
        assert!(matches!(
            ContractRequest::new(&named, &bad_data, None, &ctx).validate(),
            Err(DocumentError::InvalidInput(_))
        ));
    }

    #[test]
    fn validation_errors_convert_into_document_errors() {
        let err: DocumentError = ValidationError::empty_field("name").into();
        assert!(matches!(err, DocumentError::InvalidInput(_)));
        assert!(err.to_string().contains("name"));
    }
}
