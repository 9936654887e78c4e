//! Metrics and encoding of the standard Helvetica faces.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em. The built-in fonts
//! are written with WinAnsiEncoding, so text is reduced to that repertoire
//! before it is measured or drawn.

pub const PT_TO_MM: f32 = 0.352_778;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Helvetica, U+0020..=U+007E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold, U+0020..=U+007E.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a-m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n-z
    389, 280, 389, 584, // {..~
];

/// Whether `c` has a code point in WinAnsiEncoding (Windows-1252).
pub fn is_winansi(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}')
        || matches!(
            c,
            '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž' | '‘'
                | '’' | '“' | '”' | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž' | 'Ÿ'
        )
}

/// Invisible modifiers that have no glyph of their own.
fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FE00}'..='\u{FE0F}' | '\u{2060}')
}

/// Reduces `text` to WinAnsiEncoding: zero-width modifiers are dropped and
/// every other unsupported character becomes `?`.
pub fn to_winansi(text: &str) -> String {
    text.chars()
        .filter(|c| !is_zero_width(*c))
        .map(|c| match c {
            '\t' => ' ',
            c if c == '\n' || is_winansi(c) => c,
            _ => '?',
        })
        .collect()
}

/// Unaccented letter used for the width of accented Latin-1 letters.
fn base_letter(c: char) -> Option<char> {
    Some(match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Š' => 'S',
        'Ž' => 'Z',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' => 's',
        'ž' => 'z',
        _ => return None,
    })
}

/// Advance width of `c` in 1/1000 em.
pub fn glyph_units(c: char, weight: FontWeight) -> u32 {
    let (ascii, fallback) = match weight {
        FontWeight::Regular => (&HELVETICA, 556),
        FontWeight::Bold => (&HELVETICA_BOLD, 611),
    };
    let c = base_letter(c).unwrap_or(c);

    if let Some(index) = (c as u32).checked_sub(0x20).filter(|i| *i < 95) {
        return u32::from(ascii[index as usize]);
    }

    let bold = weight == FontWeight::Bold;
    match c {
        '\u{A0}' => 278,
        '‘' | '’' | '‚' => if bold { 278 } else { 222 },
        '“' | '”' | '„' => if bold { 500 } else { 333 },
        '‹' | '›' => 333,
        '•' => 350,
        '°' => 400,
        '«' | '»' | '–' | '€' | '†' | '‡' | '£' | '¥' | '¢' | '§' => 556,
        '×' | '÷' | '±' | '¬' => 584,
        'ì'..='ï' => 278,
        'ß' => 611,
        '©' | '®' => 737,
        'æ' => 889,
        'œ' => 944,
        '—' | '…' | '‰' | '™' | 'Æ' | 'Œ' => 1000,
        _ => fallback,
    }
}

/// Width of `text` in 1/1000 em.
pub fn text_units(text: &str, weight: FontWeight) -> u32 {
    text.chars().map(|c| glyph_units(c, weight)).sum()
}

/// Millimetres covered by 1/1000 em at `size_pt`.
fn mm_per_unit(size_pt: f32) -> f32 {
    size_pt * PT_TO_MM / 1000.0
}

pub fn text_width_mm(text: &str, size_pt: f32, weight: FontWeight) -> f32 {
    text_units(text, weight) as f32 * mm_per_unit(size_pt)
}

/// Width budget in 1/1000 em for a line of `width_mm` at `size_pt`.
pub fn units_for_width(width_mm: f32, size_pt: f32) -> f32 {
    width_mm / mm_per_unit(size_pt)
}
