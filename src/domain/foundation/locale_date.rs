//! Date display in the pt-BR convention.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Formats a date as `dd/mm/yyyy`.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a date in long form, e.g. "1º de maio de 2024".
///
/// The first day of the month takes the ordinal indicator, as is usual in
/// Brazilian legal documents.
pub fn format_long_date_br(date: NaiveDate) -> String {
    let day = if date.day() == 1 {
        "1º".to_string()
    } else {
        date.day().to_string()
    };
    format!(
        "{} de {} de {}",
        day,
        MONTHS[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn short_date_is_day_month_year() {
        assert_eq!(format_date_br(date(2024, 5, 1)), "01/05/2024");
        assert_eq!(format_date_br(date(2023, 12, 31)), "31/12/2023");
    }

    #[test]
    fn long_date_uses_month_names() {
        assert_eq!(format_long_date_br(date(2024, 3, 15)), "15 de março de 2024");
    }

    #[test]
    fn long_date_marks_first_day_as_ordinal() {
        assert_eq!(format_long_date_br(date(2024, 5, 1)), "1º de maio de 2024");
    }
}
