//! Per-contract data supplied by the caller.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// The record a single contract is generated from.
///
/// Every field is optional: generation never fails on missing data, it
/// leaves blanks or placeholder phrases for manual completion instead.
/// Blank strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractData {
    // Counter-party identity
    #[serde(alias = "contractedName")]
    pub contracted_name: Option<String>,
    #[serde(alias = "contractedDocument", alias = "contractedCpfCnpj")]
    pub contracted_document: Option<String>,
    #[serde(alias = "contractedAddress")]
    pub contracted_address: Option<String>,
    #[serde(alias = "contractedEmail")]
    pub contracted_email: Option<String>,
    #[serde(alias = "contractedPhone")]
    pub contracted_phone: Option<String>,
    #[serde(alias = "contractedStageName")]
    pub contracted_stage_name: Option<String>,

    // Contract terms
    #[serde(alias = "contractTitle")]
    pub contract_title: Option<String>,
    #[serde(alias = "serviceType")]
    pub service_type: Option<String>,
    #[serde(alias = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(alias = "endDate")]
    pub end_date: Option<NaiveDate>,
    #[serde(alias = "fixedValue")]
    pub fixed_value: Option<f64>,
    #[serde(alias = "royaltiesPercentage")]
    pub royalties_percentage: Option<f64>,
    #[serde(alias = "advanceValue")]
    pub advance_value: Option<f64>,
    #[serde(alias = "monthlySupport")]
    pub monthly_support: Option<f64>,
    #[serde(alias = "paymentTerms")]
    pub payment_terms: Option<String>,

    // Linked work
    #[serde(alias = "workTitle")]
    pub work_title: Option<String>,
    #[serde(alias = "phonogramTitle")]
    pub phonogram_title: Option<String>,
    pub isrc: Option<String>,

    /// Caller-defined tokens merged into the substitution table.
    #[serde(alias = "customFields")]
    pub custom_fields: BTreeMap<String, String>,
}

/// Returns the trimmed value when present and not blank.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ContractData {
    /// Counter-party name, when filled in.
    pub fn counter_party_name(&self) -> Option<&str> {
        present(&self.contracted_name)
    }

    /// Counter-party stage name, when filled in.
    pub fn stage_name(&self) -> Option<&str> {
        present(&self.contracted_stage_name)
    }

    /// Per-contract title, when filled in.
    pub fn title(&self) -> Option<&str> {
        present(&self.contract_title)
    }

    /// Rejects values no contract could sensibly carry.
    ///
    /// Absent values are always accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rate) = self.royalties_percentage {
            if !rate.is_finite() {
                return Err(ValidationError::invalid_format(
                    "royalties_percentage",
                    "not a finite number",
                ));
            }
            if !(0.0..=100.0).contains(&rate) {
                return Err(ValidationError::out_of_range(
                    "royalties_percentage",
                    0.0,
                    100.0,
                    rate,
                ));
            }
        }

        let amounts = [
            ("fixed_value", self.fixed_value),
            ("advance_value", self.advance_value),
            ("monthly_support", self.monthly_support),
        ];
        for (field, value) in amounts {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ValidationError::invalid_format(field, "not a finite number"));
                }
            }
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ValidationError::invalid_format(
                    "end_date",
                    "ends before the start date",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_count_as_absent() {
        let data = ContractData {
            contracted_name: Some("   ".to_string()),
            contracted_stage_name: Some(" MC Aurora ".to_string()),
            ..Default::default()
        };
        assert!(data.counter_party_name().is_none());
        assert_eq!(data.stage_name(), Some("MC Aurora"));
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "contractedName": "João Da Silva",
            "startDate": "2024-05-01",
            "fixedValue": 1500.5,
            "royaltiesPercentage": 15,
            "customFields": {"territorio": "Brasil"}
        }"#;
        let data: ContractData = serde_json::from_str(json).unwrap();
        assert_eq!(data.counter_party_name(), Some("João Da Silva"));
        assert_eq!(data.start_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(data.fixed_value, Some(1500.5));
        assert_eq!(data.royalties_percentage, Some(15.0));
        assert_eq!(data.custom_fields.get("territorio").map(String::as_str), Some("Brasil"));
    }

    #[test]
    fn empty_record_is_valid() {
        assert!(ContractData::default().validate().is_ok());
    }

    #[test]
    fn royalties_above_hundred_are_rejected() {
        let data = ContractData {
            royalties_percentage: Some(120.0),
            ..Default::default()
        };
        assert!(matches!(
            data.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let data = ContractData {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            ..Default::default()
        };
        assert!(matches!(
            data.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
