//! Identity of the document-issuing company.
//!
//! The issuer identity is a plain value injected per generation. A hardcoded
//! default exists for deployments that configure nothing; configuration and
//! templates layer partial overrides on top of it field by field.

use serde::{Deserialize, Serialize};

/// Personal identity of the company's legal representative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeData {
    pub name: String,
    pub nationality: String,
    #[serde(alias = "maritalStatus")]
    pub marital_status: String,
    pub profession: String,
    pub rg: String,
    pub cpf: String,
    pub address: String,
}

/// Full identity of the company issuing contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyData {
    pub name: String,
    /// Legal form description, e.g. "sociedade empresária limitada".
    #[serde(alias = "legalForm")]
    pub legal_form: String,
    pub cnpj: String,
    pub address: String,
    /// City used in the place-and-date line above the signatures.
    pub city: String,
    pub email: String,
    pub phone: String,
    /// Short line printed under the company name in text banners.
    pub tagline: String,
    pub representative: RepresentativeData,
}

impl CompanyData {
    /// The built-in issuer identity.
    pub fn default_identity() -> Self {
        Self {
            name: "Selo Aurora Música Ltda.".to_string(),
            legal_form: "pessoa jurídica de direito privado, constituída sob a forma de sociedade empresária limitada".to_string(),
            cnpj: "12.345.678/0001-90".to_string(),
            address: "Rua Harmonia, 100, Vila Madalena, São Paulo/SP, CEP 05435-000".to_string(),
            city: "São Paulo".to_string(),
            email: "contratos@seloaurora.com.br".to_string(),
            phone: "(11) 3000-1000".to_string(),
            tagline: "Gestão artística, produção e distribuição musical".to_string(),
            representative: RepresentativeData {
                name: "Marina Alves Costa".to_string(),
                nationality: "brasileira".to_string(),
                marital_status: "casada".to_string(),
                profession: "empresária".to_string(),
                rg: "12.345.678-9 SSP/SP".to_string(),
                cpf: "123.456.789-00".to_string(),
                address: "Rua dos Pinheiros, 45, Pinheiros, São Paulo/SP".to_string(),
            },
        }
    }

    /// Returns a copy with every non-blank override field applied.
    pub fn merged(&self, overrides: &CompanyOverride) -> Self {
        let mut merged = self.clone();
        apply(&mut merged.name, &overrides.name);
        apply(&mut merged.legal_form, &overrides.legal_form);
        apply(&mut merged.cnpj, &overrides.cnpj);
        apply(&mut merged.address, &overrides.address);
        apply(&mut merged.city, &overrides.city);
        apply(&mut merged.email, &overrides.email);
        apply(&mut merged.phone, &overrides.phone);
        apply(&mut merged.tagline, &overrides.tagline);

        let rep = &mut merged.representative;
        apply(&mut rep.name, &overrides.representative_name);
        apply(&mut rep.nationality, &overrides.representative_nationality);
        apply(&mut rep.marital_status, &overrides.representative_marital_status);
        apply(&mut rep.profession, &overrides.representative_profession);
        apply(&mut rep.rg, &overrides.representative_rg);
        apply(&mut rep.cpf, &overrides.representative_cpf);
        apply(&mut rep.address, &overrides.representative_address);
        merged
    }

    /// Contact line used by text footers.
    pub fn contact_line(&self) -> String {
        [self.address.as_str(), self.phone.as_str(), self.email.as_str()]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Default for CompanyData {
    fn default() -> Self {
        Self::default_identity()
    }
}

fn apply(target: &mut String, value: &Option<String>) {
    if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        *target = v.to_string();
    }
}

/// Partial company identity carried by templates (`defaultFields.companyData`)
/// and by configuration. Every field is optional; blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyOverride {
    pub name: Option<String>,
    #[serde(alias = "legalForm")]
    pub legal_form: Option<String>,
    pub cnpj: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tagline: Option<String>,
    #[serde(alias = "representativeName")]
    pub representative_name: Option<String>,
    #[serde(alias = "representativeNationality")]
    pub representative_nationality: Option<String>,
    #[serde(alias = "representativeMaritalStatus")]
    pub representative_marital_status: Option<String>,
    #[serde(alias = "representativeProfession")]
    pub representative_profession: Option<String>,
    #[serde(alias = "representativeRg")]
    pub representative_rg: Option<String>,
    #[serde(alias = "representativeCpf")]
    pub representative_cpf: Option<String>,
    #[serde(alias = "representativeAddress")]
    pub representative_address: Option<String>,
}

impl CompanyOverride {
    /// True when no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
