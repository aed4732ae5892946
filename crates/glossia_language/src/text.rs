//! Text normalization shared by pattern registration and tokenization.
//!
//! Literal and marker comparison happens on normalized forms: lowercased,
//! with common Latin diacritics folded to their base letter. Both sides of a
//! comparison (token stream and alias set) normalize the same way.

/// Normalizes text for matching: lowercase plus diacritic folding.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

/// Folds one lowercase character to its unaccented base letter.
///
/// Covers the Latin diacritics that occur in the shipped language set;
/// anything else passes through unchanged.
#[must_use]
pub const fn fold_diacritic(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'ē' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ß' => 's',
        'ğ' => 'g',
        'ş' => 's',
        'ı' => 'i',
        other => other,
    }
}
