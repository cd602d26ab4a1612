//! Money value object in Brazilian reais.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::number_words::integer_to_words;

/// An amount of money held as whole centavos.
///
/// Display follows the pt-BR currency convention: `R$ 1.500,50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero reais.
    pub const ZERO: Self = Self(0);

    /// Creates a Money from a decimal amount of reais, rounding to the nearest centavo.
    pub fn from_reais(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Creates a Money from whole centavos.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in centavos.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Spells the amount out in Portuguese words.
    ///
    /// `1500.50` becomes "mil e quinhentos reais e cinquenta centavos".
    pub fn to_words(&self) -> String {
        let negative = self.0 < 0;
        let abs = self.0.unsigned_abs();
        let reais = abs / 100;
        let centavos = abs % 100;

        let mut parts = Vec::with_capacity(2);
        if reais > 0 {
            let unit = if reais == 1 {
                "real"
            } else if reais % 1_000_000 == 0 {
                "de reais"
            } else {
                "reais"
            };
            parts.push(format!("{} {}", integer_to_words(reais), unit));
        }
        if centavos > 0 {
            let unit = if centavos == 1 { "centavo" } else { "centavos" };
            parts.push(format!("{} {}", integer_to_words(centavos), unit));
        }

        let words = if parts.is_empty() {
            "zero reais".to_string()
        } else {
            parts.join(" e ")
        };

        if negative {
            format!("menos {}", words)
        } else {
            words
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

/// Formats an integer with `.` as the thousands separator.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
