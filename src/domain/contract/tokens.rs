//! Variable substitution for `{{token}}` placeholders.
//!
//! A [`TokenTable`] is computed once per generation from the contract data,
//! the issuer identity and the generation date. Resolution is a single
//! left-to-right pass over the text: every `{{key}}` span whose key is in the
//! table is replaced, anything else is copied through untouched. Replaced
//! values are never rescanned.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::company::CompanyData;
use super::data::{present, ContractData};
use crate::domain::foundation::{format_date_br, format_decimal_br, percentage_to_words, Money};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Precomputed map of token key to resolved text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    entries: BTreeMap<String, String>,
}

impl TokenTable {
    /// Builds the full token table for one generation.
    ///
    /// Custom fields from `data` are merged last and win over built-in
    /// tokens of the same key.
    pub fn build(data: &ContractData, company: &CompanyData, today: NaiveDate) -> Self {
        let mut table = Self::default();

        // Issuer identity
        let rep = &company.representative;
        table.set("company_name", &company.name);
        table.set("company_legal_form", &company.legal_form);
        table.set("company_cnpj", &company.cnpj);
        table.set("company_address", &company.address);
        table.set("company_city", &company.city);
        table.set("company_email", &company.email);
        table.set("company_phone", &company.phone);
        table.set("company_representative_name", &rep.name);
        table.set("company_representative_nationality", &rep.nationality);
        table.set("company_representative_marital_status", &rep.marital_status);
        table.set("company_representative_profession", &rep.profession);
        table.set("company_representative_rg", &rep.rg);
        table.set("company_representative_cpf", &rep.cpf);
        table.set("company_representative_address", &rep.address);

        // Counter-party identity
        table.set_text("contracted_name", &data.contracted_name);
        table.set_text("contracted_document", &data.contracted_document);
        table.set_text("contracted_address", &data.contracted_address);
        table.set_text("contracted_email", &data.contracted_email);
        table.set_text("contracted_phone", &data.contracted_phone);
        table.set_text("contracted_stage_name", &data.contracted_stage_name);

        // Terms
        table.set_text("contract_title", &data.contract_title);
        table.set_text("service_type", &data.service_type);
        table.set_text("payment_terms", &data.payment_terms);
        table.set_date("start_date", data.start_date);
        table.set_date("end_date", data.end_date);
        table.set_money("fixed_value", data.fixed_value);
        table.set_money("advance_value", data.advance_value);
        table.set_money("monthly_support", data.monthly_support);
        table.set_percentage("royalties_percentage", data.royalties_percentage);

        // Linked work
        table.set_text("work_title", &data.work_title);
        table.set_text("phonogram_title", &data.phonogram_title);
        table.set_text("isrc", &data.isrc);

        table.set("current_date", &format_date_br(today));
        table.set("current_year", &today.year().to_string());

        for (key, value) in &data.custom_fields {
            table.set(key, value);
        }

        table
    }

    /// Resolved value for a key, without braces.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of known tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every known `{{key}}` in `text`; unknown tokens pass through.
    pub fn resolve(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let candidate = &rest[start..];
            let inner = &candidate[OPEN.len()..];

            let Some(end) = inner.find(CLOSE) else {
                out.push_str(candidate);
                return out;
            };

            let key = &inner[..end];
            if let Some(nested) = key.find(OPEN) {
                // "{{a {{b}}": only the innermost opener can start a token.
                let skip = OPEN.len() + nested;
                out.push_str(&candidate[..skip]);
                rest = &candidate[skip..];
                continue;
            }

            let span_len = OPEN.len() + end + CLOSE.len();
            match self.entries.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&candidate[..span_len]),
            }
            rest = &candidate[span_len..];
        }

        out.push_str(rest);
        out
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn set_text(&mut self, key: &str, value: &Option<String>) {
        self.set(key, present(value).unwrap_or(""));
    }

    fn set_date(&mut self, key: &str, value: Option<NaiveDate>) {
        let formatted = value.map(format_date_br).unwrap_or_default();
        self.set(key, &formatted);
    }

    fn set_money(&mut self, key: &str, value: Option<f64>) {
        let money = value.map(Money::from_reais);
        let formatted = money.map(|m| m.to_string()).unwrap_or_default();
        let words = money.map(|m| m.to_words()).unwrap_or_default();
        self.set(key, &formatted);
        self.set(&format!("{}_words", key), &words);
    }

    fn set_percentage(&mut self, key: &str, value: Option<f64>) {
        let numeral = value.map(format_decimal_br).unwrap_or_default();
        let words = value.map(percentage_to_words).unwrap_or_default();
        self.set(key, &numeral);
        self.set(&format!("{}_words", key), &words);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn table(data: &ContractData) -> TokenTable {
        TokenTable::build(data, &CompanyData::default_identity(), today())
    }

    // ───────────────────────────────────────────────────────────────
    // Table construction
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn royalties_expose_numeral_and_words() {
        let data = ContractData {
            royalties_percentage: Some(15.0),
            ..Default::default()
        };
        let t = table(&data);
        assert_eq!(t.lookup("royalties_percentage"), Some("15"));
        assert_eq!(t.lookup("royalties_percentage_words"), Some("quinze por cento"));
    }

    #[test]
    fn absent_royalties_resolve_to_empty() {
        let t = table(&ContractData::default());
        assert_eq!(t.lookup("royalties_percentage"), Some(""));
        assert_eq!(t.lookup("royalties_percentage_words"), Some(""));
    }

    #[test]
    fn fixed_value_formats_as_currency() {
        let data = ContractData {
            fixed_value: Some(1500.5),
            ..Default::default()
        };
        assert_eq!(table(&data).lookup("fixed_value"), Some("R$ 1.500,50"));
    }

    #[test]
    fn missing_fixed_value_is_empty_not_zero() {
        let t = table(&ContractData::default());
        assert_eq!(t.lookup("fixed_value"), Some(""));
        assert_eq!(t.lookup("fixed_value_words"), Some(""));
        assert_eq!(t.resolve("Valor: {{fixed_value}}"), "Valor: ");
    }

    #[test]
    fn dates_use_day_month_year() {
        let data = ContractData {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3),
            ..Default::default()
        };
        let t = table(&data);
        assert_eq!(t.lookup("start_date"), Some("03/06/2024"));
        assert_eq!(t.lookup("end_date"), Some(""));
        assert_eq!(t.lookup("current_date"), Some("01/05/2024"));
        assert_eq!(t.lookup("current_year"), Some("2024"));
    }

    #[test]
    fn company_tokens_come_from_injected_identity() {
        let mut company = CompanyData::default_identity();
        company.name = "Gravadora Norte".to_string();
        let t = TokenTable::build(&ContractData::default(), &company, today());
        assert_eq!(t.lookup("company_name"), Some("Gravadora Norte"));
    }

    #[test]
    fn custom_fields_override_only_their_own_keys() {
        let mut data = ContractData {
            contracted_name: Some("João".to_string()),
            work_title: Some("Aurora".to_string()),
            ..Default::default()
        };
        data.custom_fields
            .insert("work_title".to_string(), "Aurora (Remix)".to_string());
        data.custom_fields
            .insert("territorio".to_string(), "Brasil".to_string());

        let t = table(&data);
        assert_eq!(t.lookup("work_title"), Some("Aurora (Remix)"));
        assert_eq!(t.lookup("territorio"), Some("Brasil"));
        assert_eq!(t.lookup("contracted_name"), Some("João"));
    }

    // ───────────────────────────────────────────────────────────────
    // Resolution
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn unknown_tokens_pass_through_verbatim() {
        let t = table(&ContractData::default());
        assert_eq!(
            t.resolve("Página {{page}} de {{total_pages}}"),
            "Página {{page}} de {{total_pages}}"
        );
    }

    #[test]
    fn unterminated_token_is_copied() {
        let t = table(&ContractData::default());
        assert_eq!(t.resolve("Ano {{current_year"), "Ano {{current_year");
    }

    #[test]
    fn nested_opener_resolves_innermost_token() {
        let t = table(&ContractData::default());
        assert_eq!(t.resolve("{{x {{current_year}}"), "{{x 2024");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let mut data = ContractData::default();
        data.custom_fields
            .insert("a".to_string(), "{{current_year}}".to_string());
        let t = table(&data);
        assert_eq!(t.resolve("{{a}}"), "{{current_year}}");
    }

    #[test]
    fn resolves_multiple_tokens_in_one_pass() {
        let data = ContractData {
            contracted_name: Some("João Da Silva".to_string()),
            royalties_percentage: Some(12.5),
            ..Default::default()
        };
        let t = table(&data);
        assert_eq!(
            t.resolve("{{contracted_name}} recebe {{royalties_percentage}}% ({{royalties_percentage_words}})."),
            "João Da Silva recebe 12,5% (doze vírgula cinco por cento)."
        );
    }

    proptest! {
        #[test]
        fn resolve_is_idempotent_for_same_input(text in ".{0,200}") {
            let t = table(&ContractData::default());
            prop_assert_eq!(t.resolve(&text), t.resolve(&text));
        }

        #[test]
        fn text_without_braces_is_unchanged(text in "[^{}]{0,200}") {
            let t = table(&ContractData::default());
            prop_assert_eq!(t.resolve(&text), text);
        }

        #[test]
        fn royalty_words_present_iff_percentage_present(rate in proptest::option::of(0.0f64..100.0)) {
            let data = ContractData { royalties_percentage: rate, ..Default::default() };
            let t = table(&data);
            let words = t.lookup("royalties_percentage_words").unwrap_or_default();
            let numeral = t.lookup("royalties_percentage").unwrap_or_default();
            prop_assert_eq!(rate.is_some(), !words.is_empty());
            prop_assert_eq!(rate.is_some(), !numeral.is_empty());
        }
    }
}
