/// Encoding of an attached license text.
///
/// CycloneDX attachments carry an encoding tag; license evidence is always
/// transported as base64 so that arbitrary file bytes survive JSON transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentEncoding {
    Base64,
}

impl AttachmentEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            AttachmentEncoding::Base64 => "base64",
        }
    }
}

/// License text evidence attached to a declared license.
///
/// Once set on a license it is treated as immutable for the remainder of the
/// generation run; re-running the attachment pass never replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedText {
    content: String,
    encoding: AttachmentEncoding,
    content_type: &'static str,
}

impl AttachedText {
    /// Creates a base64-encoded attachment with the given content type.
    ///
    /// `content_type` comes from the locator's fixed extension registry
    /// (`text/plain`, `text/txt`, `text/markdown`, `text/xml`).
    pub fn base64(content: String, content_type: &'static str) -> Self {
        Self {
            content,
            encoding: AttachmentEncoding::Base64,
            content_type,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn encoding(&self) -> AttachmentEncoding {
        self.encoding
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }
}

/// A declared license of a component.
///
/// This is a closed sum type: every consumption site matches exhaustively,
/// so adding a fourth variant is a compile-time event, not a runtime surprise.
///
/// - `Named`: a free-text license name (e.g. "Sun Public License").
/// - `Identified`: an SPDX short identifier (e.g. "Apache-2.0").
/// - `Expression`: an opaque boolean license expression (e.g. "MIT OR GPL-2.0-only").
///   Expressions never carry attached text; their sub-licenses are not
///   individually resolvable here.
#[derive(Debug, Clone, PartialEq)]
pub enum License {
    Named {
        name: String,
        text: Option<AttachedText>,
    },
    Identified {
        id: String,
        text: Option<AttachedText>,
    },
    Expression(String),
}

impl License {
    pub fn named(name: impl Into<String>) -> Self {
        License::Named {
            name: name.into(),
            text: None,
        }
    }

    pub fn identified(id: impl Into<String>) -> Self {
        License::Identified {
            id: id.into(),
            text: None,
        }
    }

    pub fn expression(expr: impl Into<String>) -> Self {
        License::Expression(expr.into())
    }

    /// The attached license text, if any. Expressions never have one.
    pub fn text(&self) -> Option<&AttachedText> {
        match self {
            License::Named { text, .. } => text.as_ref(),
            License::Identified { text, .. } => text.as_ref(),
            License::Expression(_) => None,
        }
    }

    pub fn has_text(&self) -> bool {
        self.text().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_encoding_as_str() {
        assert_eq!(AttachmentEncoding::Base64.as_str(), "base64");
    }

    #[test]
    fn test_attached_text_base64() {
        let text = AttachedText::base64("TUlUIExpY2Vuc2U=".to_string(), "text/plain");
        assert_eq!(text.content(), "TUlUIExpY2Vuc2U=");
        assert_eq!(text.encoding(), AttachmentEncoding::Base64);
        assert_eq!(text.content_type(), "text/plain");
    }

    #[test]
    fn test_named_license_starts_without_text() {
        let license = License::named("MIT");
        assert!(license.text().is_none());
        assert!(!license.has_text());
    }

    #[test]
    fn test_identified_license_text_access() {
        let mut license = License::identified("Apache-2.0");
        assert!(!license.has_text());

        if let License::Identified { text, .. } = &mut license {
            *text = Some(AttachedText::base64("YWJj".to_string(), "text/txt"));
        }
        assert!(license.has_text());
        assert_eq!(license.text().unwrap().content_type(), "text/txt");
    }

    #[test]
    fn test_expression_never_has_text() {
        let license = License::expression("MIT OR Apache-2.0");
        assert!(license.text().is_none());
        assert!(!license.has_text());
    }
}
