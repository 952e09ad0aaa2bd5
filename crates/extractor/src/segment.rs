const CLAUSE_DELIMITERS: [char; 3] = ['\n', '.', '،'];

/// Clauses shorter than this carry no day, time or subject worth scanning.
const MIN_CLAUSE_CHARS: usize = 3;

/// Splits raw input into trimmed clauses, in input order.
pub fn segment(text: &str) -> Vec<&str> {
    text.split(CLAUSE_DELIMITERS)
        .map(str::trim)
        .filter(|clause| clause.chars().count() >= MIN_CLAUSE_CHARS)
        .collect()
}
