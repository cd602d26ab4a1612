//! Issuing company identity configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::contract::{CompanyData, CompanyOverride};

/// Replaces parts of the built-in company identity.
///
/// `LABEL_CONTRACTS__COMPANY__NAME=...` overrides `name`, and so on for every
/// `CompanyOverride` field. Templates can still override on top of this.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CompanyConfig {
    pub identity: CompanyOverride,
}

impl CompanyConfig {
    /// Built-in identity with configured values applied.
    pub fn resolve(&self) -> CompanyData {
        CompanyData::default_identity().merged(&self.identity)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(email) = self.identity.email.as_deref() {
            let email = email.trim();
            if !email.is_empty() && !email.contains('@') {
                return Err(ValidationError::InvalidCompanyEmail(email.to_string()));
            }
        }
        Ok(())
    }
}
