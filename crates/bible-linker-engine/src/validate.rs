use serde::Serialize;

use crate::canon::CanonRegistry;
use crate::reference::ParsedReference;

/// Outcome of checking a reference against the canon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: "Valid reference".to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Checks that the parsed book exists and the chapter is within its bounds.
///
/// Verse numbers are not checked; there is no per-chapter verse table.
pub fn validate_reference(
    registry: &CanonRegistry,
    parsed: Option<&ParsedReference>,
) -> ValidationResult {
    let Some(reference) = parsed else {
        return ValidationResult::invalid("Invalid reference format");
    };

    let Some(entry) = registry.lookup_by_spelling(&reference.book.to_lowercase()) else {
        return ValidationResult::invalid(format!("Book \"{}\" not found", reference.book));
    };

    if let Some(chapter) = reference.chapter
        && (chapter < 1 || chapter > entry.chapter_count)
    {
        return ValidationResult::invalid(format!(
            "Chapter {chapter} not found in {} (1-{})",
            reference.book, entry.chapter_count
        ));
    }

    ValidationResult::valid()
}
