//! Alias (AKA) normalization.
//!
//! Alias lists arrive as comma-separated chunks accumulated across one or
//! more `AKA:` continuation lines, with inconsistent casing, duplicates,
//! and a couple of recurring misspellings from the upstream data entry.

/// Known misspellings, matched against the uppercased name.
const NAME_CORRECTIONS: &[(&str, &str)] = &[("WHISNANT", "WHISENANT"), ("WAYLAN", "WAYLAND")];

/// Cleans, corrects, and deduplicates an accumulated alias string.
///
/// Splits on commas, trims, drops empty pieces, uppercases, applies the
/// correction table, and deduplicates preserving first-seen order. The
/// surviving names are joined with single spaces, so the output is no
/// longer comma-separated. Normalization is idempotent: a space-joined
/// result contains no commas and passes through as one already-uppercased
/// name.
pub fn normalize_aka(aka: &str) -> String {
    if aka.trim().is_empty() {
        return String::new();
    }

    let mut names: Vec<String> = Vec::new();
    for piece in aka.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let upper = piece.to_uppercase();
        let corrected = NAME_CORRECTIONS
            .iter()
            .find(|(wrong, _)| *wrong == upper)
            .map(|(_, right)| (*right).to_string())
            .unwrap_or(upper);
        if !names.contains(&corrected) {
            names.push(corrected);
        }
    }
    names.join(" ")
}
