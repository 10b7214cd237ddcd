use crate::sbom_generation::domain::Component;
use crate::sbom_generation::policies::LicenseClassifier;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The parts of an `npm ls --all --long --json` snapshot this tool consumes.
/// Every field is optional: npm omits fields for deduplicated, linked, or
/// missing packages, and older npm versions emit sparser entries.
#[derive(Debug, Deserialize)]
struct NpmSnapshot {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, NpmDependency>,
}

#[derive(Debug, Deserialize)]
struct NpmDependency {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    license: Option<DeclaredLicense>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, NpmDependency>,
}

/// package.json license declarations come in several historical shapes:
/// a plain SPDX-ish string, or the legacy `{ "type": ..., "url": ... }`
/// object. Anything else is carried as unknown and treated as undeclared.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeclaredLicense {
    Plain(String),
    Legacy {
        #[serde(rename = "type")]
        license_type: Option<String>,
    },
    Unknown(serde_json::Value),
}

impl DeclaredLicense {
    fn as_str(&self) -> Option<&str> {
        match self {
            DeclaredLicense::Plain(value) => Some(value),
            DeclaredLicense::Legacy { license_type } => license_type.as_deref(),
            DeclaredLicense::Unknown(_) => None,
        }
    }
}

/// The root project and its resolved component tree.
#[derive(Debug)]
pub struct ParsedSnapshot {
    pub project_name: Option<String>,
    pub project_version: Option<String>,
    pub components: Vec<Component>,
}

/// ComponentTreeBuilder - turns an npm dependency snapshot into the domain
/// component tree.
///
/// Dependency maps are visited in name order (BTreeMap), so the resulting
/// tree is deterministic for identical snapshots. The root project itself
/// is not a component; it becomes SBOM metadata.
pub struct ComponentTreeBuilder;

impl ComponentTreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Parses the raw JSON printed by `npm ls --all --long --json`.
    ///
    /// # Errors
    /// Returns `SbomError::SnapshotParseError` when the JSON cannot be
    /// deserialized.
    pub fn parse(&self, raw_json: &str) -> Result<ParsedSnapshot> {
        let snapshot: NpmSnapshot =
            serde_json::from_str(raw_json).map_err(|e| SbomError::SnapshotParseError {
                details: e.to_string(),
            })?;

        Ok(ParsedSnapshot {
            project_name: snapshot.name,
            project_version: snapshot.version,
            components: Self::build_components(snapshot.dependencies),
        })
    }

    fn build_components(dependencies: BTreeMap<String, NpmDependency>) -> Vec<Component> {
        dependencies
            .into_iter()
            .map(|(name, dependency)| Self::build_component(name, dependency))
            .collect()
    }

    fn build_component(name: String, dependency: NpmDependency) -> Component {
        let purl = dependency
            .version
            .as_deref()
            .map(|version| Self::purl(&name, version));
        let licenses = dependency
            .license
            .as_ref()
            .and_then(DeclaredLicense::as_str)
            .filter(|declared| !declared.trim().is_empty())
            .map(|declared| vec![LicenseClassifier::classify(declared)])
            .unwrap_or_default();

        Component {
            name,
            version: dependency.version,
            install_path: dependency.path.unwrap_or_default(),
            purl,
            description: dependency.description,
            licenses,
            components: Self::build_components(dependency.dependencies),
        }
    }

    /// Package URL for an npm component. Scoped names carry a literal `@`
    /// and `/`, so each path segment is percent-encoded separately
    /// (`@scope/pkg` → `pkg:npm/%40scope/pkg@1.0.0`).
    fn purl(name: &str, version: &str) -> String {
        let encoded: Vec<String> = name
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("pkg:npm/{}@{}", encoded.join("/"), version)
    }
}

impl Default for ComponentTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
