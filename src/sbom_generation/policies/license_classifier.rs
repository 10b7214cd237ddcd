use crate::sbom_generation::domain::License;

/// SPDX short identifiers commonly seen in npm package metadata.
///
/// The table is deliberately small: it only needs to cover identifiers that
/// occur in practice, anything unrecognized is carried as a named license and
/// still participates in license text resolution.
const KNOWN_SPDX_IDS: &[&str] = &[
    "0BSD",
    "AGPL-3.0-only",
    "AGPL-3.0-or-later",
    "Apache-1.1",
    "Apache-2.0",
    "Artistic-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "BlueOak-1.0.0",
    "CC-BY-3.0",
    "CC-BY-4.0",
    "CC0-1.0",
    "EPL-2.0",
    "GPL-2.0-only",
    "GPL-2.0-or-later",
    "GPL-3.0-only",
    "GPL-3.0-or-later",
    "ISC",
    "LGPL-2.1-only",
    "LGPL-2.1-or-later",
    "LGPL-3.0-only",
    "LGPL-3.0-or-later",
    "MIT",
    "MIT-0",
    "MPL-1.1",
    "MPL-2.0",
    "Python-2.0",
    "Unlicense",
    "WTFPL",
    "Zlib",
];

/// LicenseClassifier policy - maps a declared license string from package
/// metadata onto the closed License model.
///
/// Classification rules, in order:
/// 1. Expression syntax (`OR` / `AND` / `WITH` combinators, or a parenthesized
///    form) becomes an opaque `License::Expression`.
/// 2. A known SPDX short identifier (case-insensitive) becomes
///    `License::Identified` with the canonical casing from the table.
/// 3. Anything else becomes `License::Named`.
pub struct LicenseClassifier;

impl LicenseClassifier {
    pub fn classify(declared: &str) -> License {
        let declared = declared.trim();

        if Self::is_expression(declared) {
            return License::expression(declared);
        }

        match Self::canonical_spdx_id(declared) {
            Some(id) => License::identified(id),
            None => License::named(declared),
        }
    }

    /// Detects SPDX expression syntax without parsing expression semantics.
    /// Expressions stay opaque; only their shape matters for classification.
    fn is_expression(declared: &str) -> bool {
        if declared.starts_with('(') && declared.ends_with(')') {
            return true;
        }
        let upper = declared.to_uppercase();
        upper.contains(" OR ") || upper.contains(" AND ") || upper.contains(" WITH ")
    }

    fn canonical_spdx_id(declared: &str) -> Option<&'static str> {
        KNOWN_SPDX_IDS
            .iter()
            .find(|id| id.eq_ignore_ascii_case(declared))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_spdx_id() {
        let license = LicenseClassifier::classify("MIT");
        assert_eq!(license, License::identified("MIT"));
    }

    #[test]
    fn test_classify_spdx_id_case_insensitive() {
        let license = LicenseClassifier::classify("apache-2.0");
        assert_eq!(license, License::identified("Apache-2.0"));
    }

    #[test]
    fn test_classify_expression_or() {
        let license = LicenseClassifier::classify("MIT OR Apache-2.0");
        assert_eq!(license, License::expression("MIT OR Apache-2.0"));
    }

    #[test]
    fn test_classify_expression_with_exception() {
        let license = LicenseClassifier::classify("GPL-2.0-only WITH Classpath-exception-2.0");
        assert_eq!(
            license,
            License::expression("GPL-2.0-only WITH Classpath-exception-2.0")
        );
    }

    #[test]
    fn test_classify_parenthesized_expression() {
        let license = LicenseClassifier::classify("(MIT AND CC-BY-3.0)");
        assert_eq!(license, License::expression("(MIT AND CC-BY-3.0)"));
    }

    #[test]
    fn test_classify_free_text_name() {
        let license = LicenseClassifier::classify("Sun Public License");
        assert_eq!(license, License::named("Sun Public License"));
    }

    #[test]
    fn test_classify_trims_whitespace() {
        let license = LicenseClassifier::classify("  ISC  ");
        assert_eq!(license, License::identified("ISC"));
    }
}
