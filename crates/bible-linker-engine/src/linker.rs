use std::sync::{Arc, LazyLock};

use thiserror::Error;

use crate::canon::CanonRegistry;
use crate::link::render_link;
use crate::reference::{ParsedReference, ReferenceParser};
use crate::scan::{DocumentScanner, ScanOutcome};
use crate::validate::{ValidationResult, validate_reference};

#[derive(Debug, Error)]
pub enum LinkerError {
    #[error("Failed to build the reference pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Parses, renders, validates and scans references against one registry.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct BibleLinker {
    registry: Arc<CanonRegistry>,
    scanner: DocumentScanner,
}

static STANDARD: LazyLock<BibleLinker> = LazyLock::new(|| {
    BibleLinker::new(CanonRegistry::standard()).expect("built-in canon produces a valid pattern")
});

impl BibleLinker {
    pub fn new(registry: Arc<CanonRegistry>) -> Result<Self, LinkerError> {
        let scanner = DocumentScanner::new(&registry)?;
        Ok(Self { registry, scanner })
    }

    /// Linker over the built-in canon.
    pub fn standard() -> &'static BibleLinker {
        &STANDARD
    }

    pub fn registry(&self) -> &CanonRegistry {
        &self.registry
    }

    pub fn parser(&self) -> ReferenceParser<'_> {
        ReferenceParser::new(&self.registry)
    }

    pub fn parse_reference(&self, text: &str) -> Option<ParsedReference> {
        self.parser().parse_reference(text)
    }

    /// Renders `text` as a link; unrecognised text is wrapped unchanged.
    pub fn render(&self, text: &str) -> String {
        render_link(self.parse_reference(text).as_ref(), text)
    }

    pub fn validate(&self, text: &str) -> ValidationResult {
        validate_reference(&self.registry, self.parse_reference(text).as_ref())
    }

    /// Links every reference in `document` that is not already linked.
    pub fn scan_and_convert_document(&self, document: &str) -> ScanOutcome {
        self.scanner.scan(document, |reference| self.render(reference))
    }
}
