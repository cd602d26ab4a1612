//! Contract templates as stored by the template editor.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::company::CompanyOverride;
use crate::domain::foundation::ValidationError;

/// Matches the first `<img ... src="...">` reference in banner markup.
static IMAGE_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*?\bsrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("image source pattern is valid")
});

/// A single clause: heading title plus body text, both may carry tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Clause {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Loosely-typed defaults bag of a template, narrowed to what generation reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultFields {
    #[serde(alias = "companyData")]
    pub company_data: Option<CompanyOverride>,
}

/// A stored contract template. Read-only to the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTemplate {
    /// Display name, may contain tokens (e.g. the artist name).
    pub name: String,

    /// Free-form classifier that drives party role resolution.
    #[serde(default, alias = "templateType", alias = "type")]
    pub template_type: String,

    #[serde(default)]
    pub clauses: Vec<Clause>,

    #[serde(default, alias = "headerMarkup", alias = "header_html", alias = "headerHtml")]
    pub header_markup: Option<String>,

    #[serde(default, alias = "footerMarkup", alias = "footer_html", alias = "footerHtml")]
    pub footer_markup: Option<String>,

    #[serde(default, alias = "defaultFields")]
    pub default_fields: DefaultFields,
}

impl ContractTemplate {
    /// Image reference embedded in the header markup, if any.
    pub fn header_image(&self) -> Option<String> {
        self.header_markup.as_deref().and_then(extract_image_reference)
    }

    /// Image reference embedded in the footer markup, if any.
    pub fn footer_image(&self) -> Option<String> {
        self.footer_markup.as_deref().and_then(extract_image_reference)
    }

    /// Company overrides carried by the template.
    pub fn company_override(&self) -> Option<&CompanyOverride> {
        self.default_fields.company_data.as_ref()
    }

    /// Checks the minimum a template needs to be generated from.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }
}

/// Extracts the first non-empty image source from raw markup.
pub fn extract_image_reference(markup: &str) -> Option<String> {
    IMAGE_SRC.captures_iter(markup).find_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim())
            .filter(|src| !src.is_empty())
            .map(str::to_string)
    })
}
