//! Text utilities for search normalization and filtering.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation ignored when comparing search text.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Normalize text for case, accent and punctuation insensitive matching.
///
/// Lowercases, decomposes (NFD) and drops the combining marks so accented
/// letters reduce to their base letter, removes [`STRIPPED_PUNCTUATION`]
/// and trims surrounding whitespace. Idempotent.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !STRIPPED_PUNCTUATION.contains(c))
        .collect();
    stripped.trim().to_string()
}

/// Indices of the labels that contain `query` once both are normalized.
///
/// Substring matching, not fuzzy. Indices keep the original order; an empty
/// query returns every index.
pub fn filter_options<S: AsRef<str>>(query: &str, labels: &[S]) -> Vec<usize> {
    if query.is_empty() {
        return (0..labels.len()).collect();
    }

    let needle = normalize(query);
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| normalize(label.as_ref()).contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_punctuation() {
        assert_eq!(normalize("Café!"), "cafe");
        assert_eq!(normalize("  Esch-sur-Alzette  "), "eschsuralzette");
        assert_eq!(normalize("街12,ÀÉ!"), "街12ae");
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        assert_eq!(normalize("Rue de la Gare"), "rue de la gare");
    }

    #[test]
    fn test_is_idempotent() {
        let samples = [
            "Café!",
            "a .",
            " (Ünïcödé) ",
            "Ἀθῆναι",
            "ΑΣ.",
            "ﬁne",
            "",
            "   ",
            "L-1234 Luxembourg",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    const COMMUNES: [&str; 5] = [
        "Luxembourg",
        "Esch-sur-Alzette",
        "Luxembourg-Ville",
        "Diekirch",
        "Éschdorf",
    ];

    #[test]
    fn test_filter_keeps_original_order() {
        assert_eq!(filter_options("lux", &COMMUNES), vec![0, 2]);
        assert_eq!(filter_options("ESCH", &COMMUNES), vec![1, 4]);
        assert_eq!(filter_options("sur-alz", &COMMUNES), vec![1]);
        assert!(filter_options("wiltz", &COMMUNES).is_empty());
    }

    #[test]
    fn test_filter_empty_query_returns_everything() {
        assert_eq!(filter_options("", &COMMUNES), vec![0, 1, 2, 3, 4]);
        assert!(filter_options::<&str>("", &[]).is_empty());
    }

    #[test]
    fn test_filter_punctuation_query_returns_everything() {
        assert_eq!(filter_options("!", &COMMUNES), vec![0, 1, 2, 3, 4]);
        assert_eq!(filter_options(" . ", &COMMUNES), vec![0, 1, 2, 3, 4]);
    }
}
