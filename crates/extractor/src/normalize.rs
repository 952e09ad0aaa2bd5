/// Cleans one clause before scanning.
///
/// List punctuation (Arabic comma, hyphen, underscore) becomes a space, a
/// conjunction `و` glued to the next word is split off, Arabic-Indic digits
/// are folded to ASCII and whitespace runs collapse to a single space.
pub fn normalize(text: &str) -> String {
    let replaced: String = text.chars().map(normalize_char).collect();
    let spaced = replaced.replace(" و", " و ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_char(c: char) -> char {
    match c {
        '،' | '-' | '_' => ' ',
        '٠'..='٩' => fold_digit(c, '٠'),
        '۰'..='۹' => fold_digit(c, '۰'),
        other => other,
    }
}

fn fold_digit(c: char, zero: char) -> char {
    char::from_digit(c as u32 - zero as u32, 10).unwrap_or(c)
}
