pub mod canon;
pub mod link;
pub mod linker;
pub mod reference;
pub mod scan;
pub mod text;
pub mod validate;

// Re-export key types for easier usage
pub use canon::{BookEntry, CanonBook, CanonError, CanonRegistry, CanonRegistryBuilder};
pub use link::WikiLink;
pub use linker::{BibleLinker, LinkerError};
pub use reference::{BookMatch, ParsedReference, ReferenceParser};
pub use scan::{DocumentScanner, ScanOutcome};
pub use validate::ValidationResult;

/// Renders `text` as a `[[...]]` link using the built-in canon.
///
/// Text that is not a reference is wrapped unchanged.
pub fn render(text: &str) -> String {
    BibleLinker::standard().render(text)
}

pub fn validate(text: &str) -> ValidationResult {
    BibleLinker::standard().validate(text)
}

pub fn parse_reference(text: &str) -> Option<ParsedReference> {
    BibleLinker::standard().parse_reference(text)
}

pub fn scan_and_convert_document(document: &str) -> ScanOutcome {
    BibleLinker::standard().scan_and_convert_document(document)
}
