//! Fixed legal wording shared by both renderers.

use chrono::NaiveDate;

use crate::domain::foundation::format_long_date_br;

/// Sentence binding the parties to the instrument, printed after the parties.
pub const INTRODUCTION: &str = "As partes acima identificadas têm, entre si, justo e acertado o \
presente instrumento, que se regerá pelas condições descritas a seguir e pela legislação \
aplicável.";

/// Sentence printed after the last clause.
pub const CLOSING: &str = "E, por estarem assim justas e contratadas, as partes assinam o \
presente instrumento em 2 (duas) vias de igual teor e forma, na presença das testemunhas \
abaixo, para que produza seus jurídicos e legais efeitos.";

pub const WITNESSES_HEADING: &str = "TESTEMUNHAS:";

pub const WITNESS_COUNT: usize = 2;

pub const WITNESS_NAME_LINE: &str = "Nome: ______________________________";

pub const WITNESS_DOCUMENT_LINE: &str = "CPF: ______________________________";

/// `São Paulo, 1º de maio de 2024.`
pub fn place_and_date(city: &str, date: NaiveDate) -> String {
    format!("{}, {}.", city, format_long_date_br(date))
}
