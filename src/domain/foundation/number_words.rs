//! Portuguese (pt-BR) number spelling and decimal formatting.
//!
//! Used by contract tokens that need an amount written out in full, such as
//! "15% (quinze por cento)" clauses.

const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// (singular, plural) scale names, indexed by group position above units.
const SCALES: [(&str, &str); 4] = [
    ("", ""),
    ("mil", "mil"),
    ("milhão", "milhões"),
    ("bilhão", "bilhões"),
];

/// Spells a non-negative integer in Portuguese words.
///
/// Values above the billions range fall back to the numeral.
pub fn integer_to_words(value: u64) -> String {
    if value == 0 {
        return UNITS[0].to_string();
    }
    if value >= 1_000_000_000_000 {
        return value.to_string();
    }

    // Groups of three digits, most significant first.
    let mut groups = Vec::new();
    let mut rest = value;
    let mut scale = 0;
    while rest > 0 {
        let group = (rest % 1000) as u16;
        if group > 0 {
            groups.push((group, scale));
        }
        rest /= 1000;
        scale += 1;
    }
    groups.reverse();

    let last = groups.len() - 1;
    let mut out = String::new();
    for (i, (group, scale)) in groups.iter().enumerate() {
        let words = group_with_scale(*group, *scale);
        if i > 0 {
            // The final group joins with "e" when it is a round hundred or below one hundred.
            if i == last && (*group < 100 || group % 100 == 0) {
                out.push_str(" e ");
            } else {
                out.push(' ');
            }
        }
        out.push_str(&words);
    }
    out
}

fn group_with_scale(group: u16, scale: usize) -> String {
    match scale {
        0 => hundreds_to_words(group),
        1 if group == 1 => SCALES[1].0.to_string(),
        _ => {
            let (singular, plural) = SCALES[scale];
            let name = if group == 1 { singular } else { plural };
            format!("{} {}", hundreds_to_words(group), name)
        }
    }
}

fn hundreds_to_words(value: u16) -> String {
    if value == 100 {
        return "cem".to_string();
    }

    let hundreds = (value / 100) as usize;
    let remainder = (value % 100) as usize;
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds].to_string());
    }
    if remainder > 0 {
        if remainder < 20 {
            parts.push(UNITS[remainder].to_string());
        } else {
            let tens = TENS[remainder / 10];
            let units = remainder % 10;
            if units == 0 {
                parts.push(tens.to_string());
            } else {
                parts.push(format!("{} e {}", tens, UNITS[units]));
            }
        }
    }

    parts.join(" e ")
}

/// Splits a value into its integer part and up to two significant decimal digits.
fn split_decimal(value: f64) -> (u64, String) {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let int_value = int_part.parse::<u64>().unwrap_or(0);
    (int_value, frac_part.trim_end_matches('0').to_string())
}

/// Formats a decimal with a comma separator and no trailing zeros.
///
/// `15.0` becomes "15", `12.5` becomes "12,5".
pub fn format_decimal_br(value: f64) -> String {
    let (int_value, frac) = split_decimal(value);
    let sign = if value < 0.0 && (int_value > 0 || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{}{}", sign, int_value)
    } else {
        format!("{}{},{}", sign, int_value, frac)
    }
}

/// Spells a decimal number in Portuguese, using "vírgula" for the fraction.
pub fn decimal_to_words(value: f64) -> String {
    let (int_value, frac) = split_decimal(value);
    let mut words = integer_to_words(int_value);

    if !frac.is_empty() {
        words.push_str(" vírgula");
        let leading_zeros = frac.chars().take_while(|c| *c == '0').count();
        for _ in 0..leading_zeros {
            words.push_str(" zero");
        }
        let significant = &frac[leading_zeros..];
        if let Ok(n) = significant.parse::<u64>() {
            words.push(' ');
            words.push_str(&integer_to_words(n));
        }
    }

    if value < 0.0 && words != UNITS[0] {
        format!("menos {}", words)
    } else {
        words
    }
}

/// Spells a percentage, e.g. `15` → "quinze por cento".
pub fn percentage_to_words(value: f64) -> String {
    format!("{} por cento", decimal_to_words(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spells_units_and_teens() {
        assert_eq!(integer_to_words(0), "zero");
        assert_eq!(integer_to_words(1), "um");
        assert_eq!(integer_to_words(15), "quinze");
        assert_eq!(integer_to_words(19), "dezenove");
    }

    #[test]
    fn spells_tens_with_conjunction() {
        assert_eq!(integer_to_words(20), "vinte");
        assert_eq!(integer_to_words(21), "vinte e um");
        assert_eq!(integer_to_words(99), "noventa e nove");
    }

    #[test]
    fn spells_hundreds() {
        assert_eq!(integer_to_words(100), "cem");
        assert_eq!(integer_to_words(101), "cento e um");
        assert_eq!(integer_to_words(250), "duzentos e cinquenta");
        assert_eq!(integer_to_words(999), "novecentos e noventa e nove");
    }

    #[test]
    fn spells_thousands_and_millions() {
        assert_eq!(integer_to_words(1000), "mil");
        assert_eq!(integer_to_words(1500), "mil e quinhentos");
        assert_eq!(integer_to_words(1234), "mil duzentos e trinta e quatro");
        assert_eq!(integer_to_words(2005), "dois mil e cinco");
        assert_eq!(integer_to_words(1_000_000), "um milhão");
        assert_eq!(integer_to_words(2_500_000), "dois milhões e quinhentos mil");
    }

    #[test]
    fn formats_decimals_with_comma() {
        assert_eq!(format_decimal_br(15.0), "15");
        assert_eq!(format_decimal_br(12.5), "12,5");
        assert_eq!(format_decimal_br(7.25), "7,25");
        assert_eq!(format_decimal_br(-3.5), "-3,5");
    }

    #[test]
    fn spells_percentages() {
        assert_eq!(percentage_to_words(15.0), "quinze por cento");
        assert_eq!(percentage_to_words(12.5), "doze vírgula cinco por cento");
        assert_eq!(percentage_to_words(100.0), "cem por cento");
        assert_eq!(percentage_to_words(0.05), "zero vírgula zero cinco por cento");
    }
}
