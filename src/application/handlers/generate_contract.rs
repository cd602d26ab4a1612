//! GenerateContractHandler - Command handler for producing contract documents.
//!
//! Validates the inputs, renders the contract in the requested format and
//! optionally writes the result through the file storage port.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::domain::contract::{
    Clause, CompanyData, ContractData, ContractTemplate, GenerationContext,
};
use crate::domain::foundation::ValidationError;
use crate::ports::{
    ContractGenerator, ContractRequest, DocumentError, DocumentFileStorage, ExportError,
    ExportFormat, ExportedDocument, PaginatedContractGenerator, PaginatedDocumentEncoder,
    StorageError, StoredFile,
};

/// Command to generate one contract document.
#[derive(Debug, Clone)]
pub struct GenerateContractCommand {
    pub template: ContractTemplate,
    pub data: ContractData,
    /// A non-empty list replaces the template's clauses.
    pub override_clauses: Option<Vec<Clause>>,
    pub format: ExportFormat,
    /// Date printed in the contract and in the filename.
    pub today: NaiveDate,
}

impl GenerateContractCommand {
    pub fn new(
        template: ContractTemplate,
        data: ContractData,
        format: ExportFormat,
        today: NaiveDate,
    ) -> Self {
        Self {
            template,
            data,
            override_clauses: None,
            format,
            today,
        }
    }

    pub fn with_override_clauses(mut self, clauses: Vec<Clause>) -> Self {
        self.override_clauses = Some(clauses);
        self
    }
}

/// A generated document together with where it was written.
#[derive(Debug, Clone)]
pub struct StoredContract {
    pub document: ExportedDocument,
    pub stored: StoredFile,
}

/// Error type for contract generation.
#[derive(Debug, Error)]
pub enum GenerateContractError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(ValidationError),

    #[error("Invalid contract data: {0}")]
    InvalidData(ValidationError),

    #[error(transparent)]
    Rendering(#[from] DocumentError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handler for generating contract documents.
///
/// # Dependencies
///
/// - `ContractGenerator`: HTML rendering
/// - `PaginatedContractGenerator`: page layout for PDF
/// - `PaginatedDocumentEncoder`: PDF serialisation
/// - `DocumentFileStorage`: output directory
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateContractHandler::new(html, paginated, pdf, storage, company);
/// let cmd = GenerateContractCommand::new(template, data, ExportFormat::Pdf, today);
/// let saved = handler.handle_and_store(cmd).await?;
/// println!("{}", saved.stored.path);
/// ```
pub struct GenerateContractHandler {
    markup_generator: Arc<dyn ContractGenerator>,
    paginated_generator: Arc<dyn PaginatedContractGenerator>,
    encoder: Arc<dyn PaginatedDocumentEncoder>,
    storage: Arc<dyn DocumentFileStorage>,
    company: CompanyData,
}

impl GenerateContractHandler {
    pub fn new(
        markup_generator: Arc<dyn ContractGenerator>,
        paginated_generator: Arc<dyn PaginatedContractGenerator>,
        encoder: Arc<dyn PaginatedDocumentEncoder>,
        storage: Arc<dyn DocumentFileStorage>,
        company: CompanyData,
    ) -> Self {
        Self {
            markup_generator,
            paginated_generator,
            encoder,
            storage,
            company,
        }
    }

    /// Renders the contract without touching storage.
    pub async fn handle(
        &self,
        cmd: GenerateContractCommand,
    ) -> Result<ExportedDocument, GenerateContractError> {
        // 1. Validate inputs
        cmd.template
            .validate()
            .map_err(GenerateContractError::InvalidTemplate)?;
        cmd.data
            .validate()
            .map_err(GenerateContractError::InvalidData)?;

        // 2. Render
        let context = GenerationContext::new(self.company.clone(), cmd.today);
        let request = ContractRequest::new(
            &cmd.template,
            &cmd.data,
            cmd.override_clauses.as_deref(),
            &context,
        );

        let content = match cmd.format {
            ExportFormat::Html => self.markup_generator.render(&request)?.into_bytes(),
            ExportFormat::Pdf => {
                let encodes = self.encoder.format();
                if encodes != ExportFormat::Pdf {
                    return Err(ExportError::UnsupportedFormat(format!(
                        "encoder produces {}, not pdf",
                        encodes
                    ))
                    .into());
                }
                let paginated = self.paginated_generator.render_paginated(&request).await?;
                self.encoder.encode(&paginated)?
            }
        };

        // 3. Name the result
        let document = ExportedDocument::for_contract(
            content,
            cmd.format,
            &cmd.template.template_type,
            cmd.data.counter_party_name(),
            cmd.today,
        );

        info!(
            filename = %document.filename,
            format = %document.format,
            size = document.size(),
            "contract generated"
        );
        Ok(document)
    }

    /// Renders the contract and writes it to the output directory.
    pub async fn handle_and_store(
        &self,
        cmd: GenerateContractCommand,
    ) -> Result<StoredContract, GenerateContractError> {
        let document = self.handle(cmd).await?;
        let stored = self
            .storage
            .write(&document.filename, &document.content)
            .await?;

        info!(path = %stored.path, checksum = %stored.checksum, "contract stored");
        Ok(StoredContract { document, stored })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
