use crate::sbom_generation::domain::License;

/// A single resolved dependency in the project's dependency tree.
///
/// Components form a tree: each component exclusively owns its
/// sub-components. The tree is built once from the npm dependency snapshot,
/// annotated in place by the license text attachment pass, and then handed
/// to the formatter read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Package name as resolved by npm
    pub name: String,
    /// Resolved version, when npm reports one
    pub version: Option<String>,
    /// On-disk install location; empty string means "location unknown"
    pub install_path: String,
    /// Package URL (purl), when a version is known
    pub purl: Option<String>,
    /// Short description from package metadata
    pub description: Option<String>,
    /// Declared licenses; empty when the package declares none
    pub licenses: Vec<License>,
    /// Resolved sub-dependencies
    pub components: Vec<Component>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            install_path: String::new(),
            purl: None,
            description: None,
            licenses: Vec::new(),
            components: Vec::new(),
        }
    }

    /// `name@version` when a version is known, bare name otherwise.
    pub fn coordinate(&self) -> String {
        match &self.version {
            Some(version) => format!("{}@{}", self.name, version),
            None => self.name.clone(),
        }
    }

    /// Number of components in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .components
            .iter()
            .map(Component::subtree_size)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_new_defaults() {
        let component = Component::new("left-pad");
        assert_eq!(component.name, "left-pad");
        assert!(component.version.is_none());
        assert!(component.install_path.is_empty());
        assert!(component.licenses.is_empty());
        assert!(component.components.is_empty());
    }

    #[test]
    fn test_coordinate_with_version() {
        let mut component = Component::new("left-pad");
        component.version = Some("1.3.0".to_string());
        assert_eq!(component.coordinate(), "left-pad@1.3.0");
    }

    #[test]
    fn test_coordinate_without_version() {
        let component = Component::new("left-pad");
        assert_eq!(component.coordinate(), "left-pad");
    }

    #[test]
    fn test_subtree_size() {
        let mut root = Component::new("a");
        let mut child = Component::new("b");
        child.components.push(Component::new("c"));
        root.components.push(child);
        root.components.push(Component::new("d"));
        assert_eq!(root.subtree_size(), 4);
    }
}
