//! Party role resolution.
//!
//! The template classifier decides which legal role the issuing company plays
//! toward the counter-party. Classification rules are evaluated in order and
//! the first match wins, so a type matching both agency and collaborator
//! keywords resolves to agency.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::company::CompanyData;
use super::data::{present, ContractData};

const CONTRATANTE: &str = "CONTRATANTE";
const CONTRATADO: &str = "CONTRATADO(A)";
const REPRESENTANTE: &str = "REPRESENTANTE";
const REPRESENTADO: &str = "REPRESENTADO(A)";

/// Matched against the normalised classifier.
const AGENCY_KEYWORDS: &[&str] = &[
    "agenciamento",
    "agencia",
    "agency",
    "representacao",
    "representante",
    "empresariamento",
    "management",
    "gestaodecarreira",
];

const COLLABORATOR_KEYWORDS: &[&str] = &[
    "colaboracao",
    "colaborador",
    "participacao",
    "feat",
    "musicodesessao",
    "musico",
    "sessionmusician",
    "beatmaker",
    "compositor",
    "cessao",
    "freelancer",
    "prestador",
];

/// Ordered classification rules. Order is precedence.
const CLASSIFICATION_RULES: &[(PartyStructure, &[&str])] = &[
    (PartyStructure::Agency, AGENCY_KEYWORDS),
    (PartyStructure::Collaborator, COLLABORATOR_KEYWORDS),
];

// Placeholders for identity fields the data record does not capture.
const NAME_PLACEHOLDER: &str = "(nome completo)";
const NATIONALITY_PLACEHOLDER: &str = "(nacionalidade)";
const MARITAL_STATUS_PLACEHOLDER: &str = "(estado civil)";
const PROFESSION_PLACEHOLDER: &str = "(profissão)";
const AGE_PLACEHOLDER: &str = "(idade)";
const DOCUMENT_PLACEHOLDER: &str = "(CPF/CNPJ)";
const ADDRESS_PLACEHOLDER: &str = "(endereço completo)";

/// Which role the issuing company plays in the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyStructure {
    /// The company provides a service to the counter-party.
    Production,
    /// The company engages the counter-party.
    Collaborator,
    /// The company represents the counter-party.
    Agency,
}

impl PartyStructure {
    /// Classifies a free-form template type. Unknown types are `Production`.
    pub fn classify(template_type: &str) -> Self {
        let normalized = normalize_type(template_type);
        CLASSIFICATION_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
            .map(|(structure, _)| *structure)
            .unwrap_or(PartyStructure::Production)
    }

    /// Role label of the issuing company.
    pub fn issuer_label(&self) -> &'static str {
        match self {
            PartyStructure::Production => CONTRATADO,
            PartyStructure::Collaborator => CONTRATANTE,
            PartyStructure::Agency => REPRESENTANTE,
        }
    }

    /// Role label of the counter-party.
    pub fn counter_party_label(&self) -> &'static str {
        match self {
            PartyStructure::Production => CONTRATANTE,
            PartyStructure::Collaborator => CONTRATADO,
            PartyStructure::Agency => REPRESENTADO,
        }
    }
}

impl fmt::Display for PartyStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyStructure::Production => write!(f, "production"),
            PartyStructure::Collaborator => write!(f, "collaborator"),
            PartyStructure::Agency => write!(f, "agency"),
        }
    }
}

/// Lowercases, folds accents and drops separators.
///
/// `"Produção Musical"`, `"producao_musical"` and `"PRODUCAO-MUSICAL"` all
/// normalise to `"producaomusical"`.
pub fn normalize_type(template_type: &str) -> String {
    template_type
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace() && !matches!(c, '_' | '-' | '.' | '/'))
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// One party as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyBlock {
    pub label: String,
    /// Name printed under the signature line.
    pub name: String,
    /// Full legal-identity paragraph.
    pub paragraph: String,
}

/// Both parties of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parties {
    pub structure: PartyStructure,
    pub issuer: PartyBlock,
    pub counter_party: PartyBlock,
}

impl Parties {
    /// Signing order: the engaging or representing party first (left).
    pub fn ordered(&self) -> (&PartyBlock, &PartyBlock) {
        match self.structure {
            PartyStructure::Production => (&self.counter_party, &self.issuer),
            PartyStructure::Collaborator | PartyStructure::Agency => {
                (&self.issuer, &self.counter_party)
            }
        }
    }
}

/// Builds labels and identity paragraphs for both parties.
pub fn build_parties(
    structure: PartyStructure,
    data: &ContractData,
    company: &CompanyData,
) -> Parties {
    let issuer_label = structure.issuer_label();
    let counter_label = structure.counter_party_label();

    Parties {
        structure,
        issuer: PartyBlock {
            label: issuer_label.to_string(),
            name: company.name.clone(),
            paragraph: issuer_paragraph(company, issuer_label),
        },
        counter_party: PartyBlock {
            label: counter_label.to_string(),
            name: data
                .counter_party_name()
                .unwrap_or(NAME_PLACEHOLDER)
                .to_string(),
            paragraph: counter_party_paragraph(data, counter_label),
        },
    }
}

fn issuer_paragraph(company: &CompanyData, label: &str) -> String {
    let rep = &company.representative;
    format!(
        "{name}, {legal_form}, inscrita no CNPJ sob o nº {cnpj}, com sede em {address}, \
         neste ato representada por {rep_name}, {nationality}, {marital_status}, {profession}, \
         portador(a) da cédula de identidade RG nº {rg}, inscrito(a) no CPF sob o nº {cpf}, \
         residente e domiciliado(a) em {rep_address}, doravante denominado \"{label}\".",
        name = company.name,
        legal_form = company.legal_form,
        cnpj = company.cnpj,
        address = company.address,
        rep_name = rep.name,
        nationality = rep.nationality,
        marital_status = rep.marital_status,
        profession = rep.profession,
        rg = rep.rg,
        cpf = rep.cpf,
        rep_address = rep.address,
        label = label,
    )
}

fn counter_party_paragraph(data: &ContractData, label: &str) -> String {
    let mut paragraph = format!(
        "{name}, {nationality}, {marital_status}, {profession}, {age}, \
         inscrito(a) no CPF/CNPJ sob o nº {document}, residente e domiciliado(a) em {address}",
        name = data.counter_party_name().unwrap_or(NAME_PLACEHOLDER),
        nationality = NATIONALITY_PLACEHOLDER,
        marital_status = MARITAL_STATUS_PLACEHOLDER,
        profession = PROFESSION_PLACEHOLDER,
        age = AGE_PLACEHOLDER,
        document = present(&data.contracted_document).unwrap_or(DOCUMENT_PLACEHOLDER),
        address = present(&data.contracted_address).unwrap_or(ADDRESS_PLACEHOLDER),
    );

    if let Some(email) = present(&data.contracted_email) {
        paragraph.push_str(&format!(", e-mail {}", email));
    }
    if let Some(phone) = present(&data.contracted_phone) {
        paragraph.push_str(&format!(", telefone {}", phone));
    }
    if let Some(stage_name) = data.stage_name() {
        paragraph.push_str(&format!(
            ", conhecido(a) artisticamente como \"{}\"",
            stage_name
        ));
    }

    paragraph.push_str(&format!(", doravante denominado(a) \"{}\".", label));
    paragraph
}
