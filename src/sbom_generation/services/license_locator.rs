use std::fs;
use std::path::{Path, PathBuf};

/// Canonical base filenames that typically hold a license or notice text.
/// Matching is case-insensitive, so casing variants are not enumerated here.
const TYPICAL_FILENAMES: &[&str] = &["license", "licence", "notice", "unlicense", "unlicence"];

/// Extension registry: candidate file extension mapped to the CycloneDX
/// content type recorded on the attachment. The empty extension maps to
/// text/plain.
const LICENSE_CONTENT_TYPES: &[(&str, &str)] = &[
    ("", "text/plain"),
    (".txt", "text/txt"),
    (".md", "text/markdown"),
    (".xml", "text/xml"),
];

/// LicenseSourceLocator - finds candidate license text files for a component.
///
/// Given a component's install path and a declared license identifier, this
/// service enumerates the filenames a license text plausibly lives under and
/// matches them against the actual directory listing. Matching is literal
/// with case folding: the identifier is treated as a token, never as a glob
/// pattern, and the search never descends into subdirectories.
///
/// Candidate generation is the cross product of:
/// - base filename tokens (`TYPICAL_FILENAMES`),
/// - filename-variant templates: `token`, `token.SHORT`, `SHORT.token`,
///   `token-SHORT`, where SHORT is the license identifier truncated at its
///   first hyphen (`Apache-2.0` → `Apache`),
/// - the extensions of the content type registry.
///
/// Matches are returned in that fixed iteration order; entries from the
/// directory listing are visited in sorted order so results are
/// deterministic for identical directory contents. Callers only consume the
/// first match, so duplicates from overlapping variants are harmless.
pub struct LicenseSourceLocator;

impl LicenseSourceLocator {
    pub fn new() -> Self {
        Self
    }

    /// Locates candidate license files under `install_path` for `license_name`.
    ///
    /// An empty install path means "location unknown" and yields no
    /// candidates. A missing or unreadable directory is not an error either;
    /// license evidence is simply unavailable for that component.
    pub fn locate(&self, install_path: &str, license_name: &str) -> Vec<PathBuf> {
        let mut matches = Vec::new();
        if install_path.is_empty() {
            return matches;
        }

        let entries = match Self::read_directory(Path::new(install_path)) {
            Some(entries) => entries,
            None => return matches,
        };

        let short_name = Self::short_license_name(license_name);
        for token in TYPICAL_FILENAMES {
            let variants = [
                (*token).to_string(),
                format!("{}.{}", token, short_name),
                format!("{}.{}", short_name, token),
                format!("{}-{}", token, short_name),
            ];
            for variant in &variants {
                for (extension, _) in LICENSE_CONTENT_TYPES {
                    let candidate = format!("{}{}", variant, extension).to_lowercase();
                    for entry in &entries {
                        if entry.to_lowercase() == candidate {
                            matches.push(Path::new(install_path).join(entry));
                        }
                    }
                }
            }
        }
        matches
    }

    /// Maps a located file to the content type recorded on its attachment.
    /// Unknown extensions fall back to text/plain, matching the no-extension
    /// entry of the registry.
    pub fn guess_content_type(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        LICENSE_CONTENT_TYPES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, content_type)| *content_type)
            .unwrap_or("text/plain")
    }

    /// Truncates a license identifier at its first hyphen, so compound
    /// identifiers yield the family name used in filename variants
    /// (`Apache-2.0` → `Apache`, `GPL-3.0-only` → `GPL`).
    fn short_license_name(license_name: &str) -> &str {
        match license_name.find('-') {
            Some(index) => &license_name[..index],
            None => license_name,
        }
    }

    /// Sorted listing of the directory's entry names. Returns None when the
    /// path does not exist or cannot be listed (soft failure).
    fn read_directory(path: &Path) -> Option<Vec<String>> {
        let read_dir = fs::read_dir(path).ok()?;
        let mut entries: Vec<String> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        Some(entries)
    }
}

impl Default for LicenseSourceLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_short_license_name_truncates_at_first_hyphen() {
        assert_eq!(LicenseSourceLocator::short_license_name("Apache-2.0"), "Apache");
        assert_eq!(LicenseSourceLocator::short_license_name("GPL-3.0-only"), "GPL");
        assert_eq!(LicenseSourceLocator::short_license_name("MIT"), "MIT");
    }

    #[test]
    fn test_locate_empty_install_path_returns_nothing() {
        let locator = LicenseSourceLocator::new();
        assert!(locator.locate("", "MIT").is_empty());
        assert!(locator.locate("", "Apache-2.0").is_empty());
    }

    #[test]
    fn test_locate_missing_directory_returns_nothing() {
        let locator = LicenseSourceLocator::new();
        let matches = locator.locate("/nonexistent/package/dir", "MIT");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_locate_license_txt() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE.txt"), "license text").unwrap();

        let locator = LicenseSourceLocator::new();
        let matches = locator.locate(dir.path().to_str().unwrap(), "MIT");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], dir.path().join("LICENSE.txt"));
        assert_eq!(
            LicenseSourceLocator::guess_content_type(&matches[0]),
            "text/txt"
        );
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "a").unwrap();
        fs::write(dir.path().join("license.MIT.md"), "b").unwrap();

        let locator = LicenseSourceLocator::new();
        let matches = locator.locate(dir.path().to_str().unwrap(), "MIT");

        assert!(matches.contains(&dir.path().join("LICENSE")));
        assert!(matches.contains(&dir.path().join("license.MIT.md")));
    }

    #[test]
    fn test_locate_variant_templates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE-MIT"), "a").unwrap();
        fs::write(dir.path().join("MIT.LICENSE"), "b").unwrap();

        let locator = LicenseSourceLocator::new();
        let matches = locator.locate(dir.path().to_str().unwrap(), "MIT");

        assert!(matches.contains(&dir.path().join("LICENSE-MIT")));
        assert!(matches.contains(&dir.path().join("MIT.LICENSE")));
    }

    #[test]
    fn test_locate_uses_short_name_for_compound_identifiers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE-Apache"), "a").unwrap();

        let locator = LicenseSourceLocator::new();
        let matches = locator.locate(dir.path().to_str().unwrap(), "Apache-2.0");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], dir.path().join("LICENSE-Apache"));
    }

    #[test]
    fn test_locate_order_is_deterministic() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("NOTICE"), "a").unwrap();
        fs::write(dir.path().join("LICENSE"), "b").unwrap();
        fs::write(dir.path().join("licence.txt"), "c").unwrap();

        let locator = LicenseSourceLocator::new();
        let first = locator.locate(dir.path().to_str().unwrap(), "MIT");
        let second = locator.locate(dir.path().to_str().unwrap(), "MIT");

        assert_eq!(first, second);
        // Token order is fixed: license before licence before notice
        assert_eq!(first[0], dir.path().join("LICENSE"));
        assert_eq!(first[1], dir.path().join("licence.txt"));
        assert_eq!(first[2], dir.path().join("NOTICE"));
    }

    #[test]
    fn test_locate_does_not_glob_metacharacters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE.txt"), "a").unwrap();

        let locator = LicenseSourceLocator::new();
        // A crafted identifier must be treated as a literal token, not a pattern
        let matches = locator.locate(dir.path().to_str().unwrap(), "*");

        // The bare token variants still match LICENSE.txt; the "*" variants match nothing
        assert_eq!(matches, vec![dir.path().join("LICENSE.txt")]);
    }

    #[test]
    fn test_locate_does_not_descend_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("LICENSE"), "a").unwrap();

        let locator = LicenseSourceLocator::new();
        let matches = locator.locate(dir.path().to_str().unwrap(), "MIT");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_guess_content_type_registry() {
        assert_eq!(
            LicenseSourceLocator::guess_content_type(Path::new("LICENSE")),
            "text/plain"
        );
        assert_eq!(
            LicenseSourceLocator::guess_content_type(Path::new("LICENSE.txt")),
            "text/txt"
        );
        assert_eq!(
            LicenseSourceLocator::guess_content_type(Path::new("LICENSE.md")),
            "text/markdown"
        );
        assert_eq!(
            LicenseSourceLocator::guess_content_type(Path::new("LICENSE.xml")),
            "text/xml"
        );
    }

    #[test]
    fn test_guess_content_type_unknown_extension_defaults_to_plain() {
        assert_eq!(
            LicenseSourceLocator::guess_content_type(Path::new("LICENSE.MIT")),
            "text/plain"
        );
    }
}
