//! Text measurement and greedy word wrapping.
//!
//! Widths come from the Helvetica and Helvetica-Bold font metrics (AFM),
//! in thousandths of an em, for the characters WinAnsi can encode. Anything
//! else is measured as `?`, which is what the PDF writer substitutes.

use super::document::FontWeight;

/// Printable ASCII, `' '` through `'~'`.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const UNITS_PER_EM: f32 = 1000.0;

/// Rendered width of `text` in points.
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, weight))).sum();
    units as f32 * size / UNITS_PER_EM
}

fn glyph_width(c: char, weight: FontWeight) -> u16 {
    let bold = weight == FontWeight::Bold;
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let ascii = |c: char| table[c as usize - ' ' as usize];

    match c {
        ' '..='~' => ascii(c),
        '\u{a0}' => 278,
        'ª' => 370,
        'º' => 365,
        '°' => 400,
        '§' | '–' | '€' => 556,
        '×' | '÷' | '±' => 584,
        'Æ' | '—' | '…' => 1000,
        'æ' => 889,
        'ß' | 'ø' => 611,
        'ì'..='ï' => 278,
        '•' => 350,
        '‘' | '’' | '‚' => if bold { 278 } else { 222 },
        '“' | '”' | '„' => if bold { 500 } else { 333 },
        _ => ascii(base_letter(c).unwrap_or('?')),
    }
}

/// Latin-1 letters share the width of their unaccented form.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'Þ' => 'P',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ð' | 'ò'..='ö' => 'o',
        'ñ' => 'n',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'þ' => 'p',
        _ => return None,
    };
    Some(base)
}

/// Wraps `text` into lines no wider than `max_width`.
///
/// Explicit newlines are kept; an empty input line yields an empty output
/// line. Words wider than a full line are split by character.
pub fn wrap(text: &str, max_width: f32, size: f32, weight: FontWeight) -> Vec<String> {
    let fits = |candidate: &str| text_width(candidate, size, weight) <= max_width;

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        wrap_line(raw_line, &fits, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, fits: &impl Fn(&str) -> bool, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut produced = false;

    for word in line.split_whitespace() {
        if !current.is_empty() {
            let candidate = format!("{} {}", current, word);
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            out.push(std::mem::take(&mut current));
            produced = true;
        }

        if fits(word) {
            current.push_str(word);
            continue;
        }

        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                out.push(std::mem::replace(&mut current, c.to_string()));
                produced = true;
            }
        }
    }

    if !current.is_empty() || !produced {
        out.push(current);
    }
}
