use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{Component, License, SbomMetadata};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<JsonComponent>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<RootComponent>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct RootComponent {
    #[serde(rename = "type")]
    component_type: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonComponent {
    #[serde(rename = "type")]
    component_type: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<LicenseEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<JsonComponent>,
}

/// CycloneDX license choice: either a wrapped license object or an
/// expression string, never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LicenseEntry {
    Wrapped { license: LicenseBody },
    Expression { expression: String },
}

#[derive(Debug, Serialize)]
struct LicenseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<JsonAttachment>,
}

#[derive(Debug, Serialize)]
struct JsonAttachment {
    content: String,
    encoding: String,
    #[serde(rename = "contentType")]
    content_type: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
/// Sub-components are serialized as nested `components` arrays, mirroring
/// the resolved dependency tree.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, components: &[Component], metadata: &SbomMetadata) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.6".to_string(),
            version: 1,
            serial_number: metadata.serial_number().to_string(),
            metadata: self.build_metadata(metadata),
            components: components.iter().map(|c| self.build_component(c)).collect(),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    fn build_metadata(&self, metadata: &SbomMetadata) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp().to_string(),
            tools: vec![Tool {
                name: metadata.tool_name().to_string(),
                version: metadata.tool_version().to_string(),
            }],
            component: metadata.project_name().map(|name| RootComponent {
                component_type: "application".to_string(),
                name: name.to_string(),
                version: metadata.project_version().map(str::to_string),
            }),
        }
    }

    fn build_component(&self, component: &Component) -> JsonComponent {
        JsonComponent {
            component_type: "library".to_string(),
            name: component.name.clone(),
            version: component.version.clone(),
            description: component.description.clone(),
            purl: component.purl.clone(),
            licenses: component
                .licenses
                .iter()
                .map(|license| self.build_license(license))
                .collect(),
            components: component
                .components
                .iter()
                .map(|sub| self.build_component(sub))
                .collect(),
        }
    }

    fn build_license(&self, license: &License) -> LicenseEntry {
        match license {
            License::Named { name, text } => LicenseEntry::Wrapped {
                license: LicenseBody {
                    id: None,
                    name: Some(name.clone()),
                    text: text.as_ref().map(Self::build_attachment),
                },
            },
            License::Identified { id, text } => LicenseEntry::Wrapped {
                license: LicenseBody {
                    id: Some(id.clone()),
                    name: None,
                    text: text.as_ref().map(Self::build_attachment),
                },
            },
            License::Expression(expression) => LicenseEntry::Expression {
                expression: expression.clone(),
            },
        }
    }

    fn build_attachment(text: &crate::sbom_generation::domain::AttachedText) -> JsonAttachment {
        JsonAttachment {
            content: text.content().to_string(),
            encoding: text.encoding().as_str().to_string(),
            content_type: text.content_type().to_string(),
        }
    }
}
