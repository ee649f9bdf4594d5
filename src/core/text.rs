/// Normalise a user-supplied name for table lookups: trimmed, lowercase,
/// Romanian diacritics folded to ASCII (both comma- and cedilla-below forms).
pub fn fold_key(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ă' | 'â' => 'a',
            'î' => 'i',
            'ș' | 'ş' => 's',
            'ț' | 'ţ' => 't',
            _ => c,
        })
        .collect()
}
