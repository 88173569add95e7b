use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a string for name comparison: lower-case, fold letters that
/// don't decompose (Ø, Æ, Ł, ...), NFD-decompose, drop combining marks, trim.
///
/// Total over all inputs (including empty) and idempotent, so index keys and
/// headline text can both go through it and compare equal, e.g. "Ødegaard"
/// and "odegaard".
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    fold_special_chars(&lowered)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Letters that are distinct codepoints rather than accented variants, so NFD
/// leaves them alone. Input is already lower-cased.
fn fold_special_chars(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            // Nordic
            'ø' => 'o',
            'æ' => 'a',
            // Polish
            'ł' => 'l',
            // Icelandic
            'ð' => 'd',
            'þ' => 't',
            // Croatian/Serbian
            'đ' => 'd',
            // German
            'ß' => 's',
            // Turkish dotless i
            'ı' => 'i',
            _ => c,
        })
        .collect()
}
