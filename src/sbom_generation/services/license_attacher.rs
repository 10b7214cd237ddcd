use crate::sbom_generation::domain::{AttachedText, Component, License};
use crate::sbom_generation::services::LicenseSourceLocator;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// Upper bound for a single license text file (10 MB). Anything larger is
/// not a plausible license text and is skipped like any other unavailable
/// evidence.
const MAX_LICENSE_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// LicenseTextAttacher - attaches license text evidence to declared licenses.
///
/// For each named or identified license of a component, the attacher asks
/// the locator for candidate files under the component's install path, reads
/// the first candidate, and stores its bytes base64-encoded together with
/// the content type guessed from the file extension. License expressions are
/// skipped entirely.
///
/// Attachment is set-once: a license that already carries text is left
/// untouched, so re-running the pass is idempotent. All filesystem trouble
/// (missing directory, no candidate, unreadable file) is absorbed as absent
/// evidence, never surfaced as an error.
pub struct LicenseTextAttacher {
    locator: LicenseSourceLocator,
}

impl LicenseTextAttacher {
    pub fn new() -> Self {
        Self {
            locator: LicenseSourceLocator::new(),
        }
    }

    /// Attaches license texts to the licenses of a single component's
    /// license set.
    ///
    /// # Arguments
    /// * `licenses` - The component's declared licenses, mutated in place
    /// * `install_path` - The component's on-disk install location
    ///
    /// # Returns
    /// The number of non-expression licenses that carry text after this
    /// call, whether newly attached or already present.
    pub fn attach(&self, licenses: &mut [License], install_path: &str) -> usize {
        for license in licenses.iter_mut() {
            match license {
                License::Named { name, text } => {
                    if text.is_none() {
                        *text = self.resolve_text(install_path, name);
                    }
                }
                License::Identified { id, text } => {
                    if text.is_none() {
                        *text = self.resolve_text(install_path, id);
                    }
                }
                License::Expression(_) => {}
            }
        }
        licenses.iter().filter(|license| license.has_text()).count()
    }

    /// Walks a component tree depth-first, attaching license texts to every
    /// component. Returns the total count of licenses with text.
    pub fn attach_tree(&self, components: &mut [Component]) -> usize {
        let mut attached = 0;
        for component in components.iter_mut() {
            let install_path = component.install_path.clone();
            attached += self.attach(&mut component.licenses, &install_path);
            attached += self.attach_tree(&mut component.components);
        }
        attached
    }

    /// Reads the first candidate the locator finds and wraps it as an
    /// attachment. Returns None when no candidate exists or the file cannot
    /// be read (evidence unavailable, soft).
    fn resolve_text(&self, install_path: &str, license_name: &str) -> Option<AttachedText> {
        let candidate = self.locator.locate(install_path, license_name).into_iter().next()?;
        let bytes = Self::read_license_file(&candidate)?;
        Some(AttachedText::base64(
            STANDARD.encode(bytes),
            LicenseSourceLocator::guess_content_type(&candidate),
        ))
    }

    fn read_license_file(path: &Path) -> Option<Vec<u8>> {
        let metadata = fs::metadata(path).ok()?;
        if !metadata.is_file() || metadata.len() > MAX_LICENSE_FILE_SIZE {
            return None;
        }
        fs::read(path).ok()
    }
}

impl Default for LicenseTextAttacher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn decode(text: &AttachedText) -> String {
        String::from_utf8(STANDARD.decode(text.content()).unwrap()).unwrap()
    }

    #[test]
    fn test_attach_reads_first_candidate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "MIT license body").unwrap();

        let attacher = LicenseTextAttacher::new();
        let mut licenses = vec![License::named("MIT")];
        let count = attacher.attach(&mut licenses, dir.path().to_str().unwrap());

        assert_eq!(count, 1);
        let text = licenses[0].text().unwrap();
        assert_eq!(decode(text), "MIT license body");
        assert_eq!(text.content_type(), "text/plain");
    }

    #[test]
    fn test_attach_guesses_content_type_from_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE.md"), "# MIT").unwrap();

        let attacher = LicenseTextAttacher::new();
        let mut licenses = vec![License::identified("MIT")];
        attacher.attach(&mut licenses, dir.path().to_str().unwrap());

        assert_eq!(licenses[0].text().unwrap().content_type(), "text/markdown");
    }

    #[test]
    fn test_attach_no_candidates_leaves_text_absent() {
        let dir = TempDir::new().unwrap();

        let attacher = LicenseTextAttacher::new();
        let mut licenses = vec![License::named("MIT")];
        let count = attacher.attach(&mut licenses, dir.path().to_str().unwrap());

        assert_eq!(count, 0);
        assert!(licenses[0].text().is_none());
    }

    #[test]
    fn test_attach_empty_install_path_is_a_no_op() {
        let attacher = LicenseTextAttacher::new();
        let mut licenses = vec![License::named("MIT")];
        let count = attacher.attach(&mut licenses, "");

        assert_eq!(count, 0);
        assert!(licenses[0].text().is_none());
    }

    #[test]
    fn test_attach_skips_expressions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "text").unwrap();

        let attacher = LicenseTextAttacher::new();
        let mut licenses = vec![License::expression("MIT OR Apache-2.0")];
        let count = attacher.attach(&mut licenses, dir.path().to_str().unwrap());

        assert_eq!(count, 0);
        assert!(licenses[0].text().is_none());
    }

    #[test]
    fn test_attach_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "original").unwrap();

        let attacher = LicenseTextAttacher::new();
        let mut licenses = vec![License::named("MIT")];
        let first_count = attacher.attach(&mut licenses, dir.path().to_str().unwrap());
        let first_content = licenses[0].text().unwrap().content().to_string();

        // Even if the file changes on disk, already attached text stays as is
        fs::write(dir.path().join("LICENSE"), "rewritten").unwrap();
        let second_count = attacher.attach(&mut licenses, dir.path().to_str().unwrap());

        assert_eq!(first_count, second_count);
        assert_eq!(licenses[0].text().unwrap().content(), first_content);
    }

    #[test]
    fn test_attach_counts_mixed_license_set() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "text").unwrap();

        let attacher = LicenseTextAttacher::new();
        let mut licenses = vec![
            License::named("MIT"),
            License::identified("Apache-2.0"),
            License::expression("MIT OR Apache-2.0"),
        ];
        let count = attacher.attach(&mut licenses, dir.path().to_str().unwrap());

        // Both non-expression licenses match the bare LICENSE file
        assert_eq!(count, 2);
    }

    #[test]
    fn test_attach_tree_visits_sub_components() {
        let parent_dir = TempDir::new().unwrap();
        let child_dir = TempDir::new().unwrap();
        fs::write(parent_dir.path().join("LICENSE"), "parent").unwrap();
        fs::write(child_dir.path().join("LICENSE"), "child").unwrap();

        let mut parent = Component::new("parent-pkg");
        parent.install_path = parent_dir.path().to_string_lossy().into_owned();
        parent.licenses.push(License::named("MIT"));

        let mut child = Component::new("child-pkg");
        child.install_path = child_dir.path().to_string_lossy().into_owned();
        child.licenses.push(License::identified("ISC"));
        parent.components.push(child);

        let attacher = LicenseTextAttacher::new();
        let mut tree = vec![parent];
        let attached = attacher.attach_tree(&mut tree);

        assert_eq!(attached, 2);
        assert_eq!(decode(tree[0].licenses[0].text().unwrap()), "parent");
        assert_eq!(
            decode(tree[0].components[0].licenses[0].text().unwrap()),
            "child"
        );
    }
}
