use crate::sbom_generation::domain::{Component, License};

/// A component found to lack complete license evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseGap {
    pub name: String,
    pub version: Option<String>,
}

impl LicenseGap {
    /// `name@version` when a version is known, bare name otherwise.
    pub fn coordinate(&self) -> String {
        match &self.version {
            Some(version) => format!("{}@{}", self.name, version),
            None => self.name.clone(),
        }
    }
}

/// LicenseGapAuditor - audits a component tree for license-evidence
/// completeness.
///
/// A license is complete when it has a non-empty name or identifier and
/// carries non-empty attached text. Expressions are always complete: their
/// sub-licenses are not individually resolvable here, so they are excluded
/// from the text requirement. A component is complete when it declares at
/// least one license and every declared license is complete; a component
/// without any declaration can never prove compliance and is always a gap.
///
/// The audit is a pure function over the tree. It visits every component
/// exactly once, parents before their subtrees, and keeps collecting below
/// incomplete ancestors; rendering the result is the caller's concern.
pub struct LicenseGapAuditor;

impl LicenseGapAuditor {
    pub fn new() -> Self {
        Self
    }

    /// Collects every component at any depth that lacks complete license
    /// evidence, in depth-first visit order.
    pub fn audit(&self, components: &[Component]) -> Vec<LicenseGap> {
        let mut gaps = Vec::new();
        self.audit_into(components, &mut gaps);
        gaps
    }

    fn audit_into(&self, components: &[Component], gaps: &mut Vec<LicenseGap>) {
        for component in components {
            if !Self::has_license_included(component) {
                gaps.push(LicenseGap {
                    name: component.name.clone(),
                    version: component.version.clone(),
                });
            }
            self.audit_into(&component.components, gaps);
        }
    }

    fn has_license_included(component: &Component) -> bool {
        !component.licenses.is_empty()
            && component.licenses.iter().all(Self::license_is_complete)
    }

    fn license_is_complete(license: &License) -> bool {
        match license {
            License::Named { name, text } => {
                !name.is_empty() && text.as_ref().is_some_and(|t| !t.content().is_empty())
            }
            License::Identified { id, text } => {
                !id.is_empty() && text.as_ref().is_some_and(|t| !t.content().is_empty())
            }
            License::Expression(_) => true,
        }
    }
}

impl Default for LicenseGapAuditor {
    fn default() -> Self {
        Self::new()
    }
}
