use bible_linker_engine::{ParsedReference, ValidationResult, parse_reference, render, validate};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("James 4:1-2", "[[James 4:1,2]]")]
#[case("Genesis", "[[Genesis]]")]
#[case("1 Corinthians 13", "[[1 Corinthians 13]]")]
#[case("not a reference", "[[not a reference]]")]
#[case("John 3:16", "[[John 3:16]]")]
#[case("1 John 3:16", "[[1 John 3:16]]")]
#[case("I Samuel 3", "[[1 Samuel 3]]")]
#[case("song of songs 2:1,3-4", "[[Song of Solomon 2:1,3,4]]")]
#[case("Revelations 22:20-21", "[[Revelation 22:20,21]]")]
#[case("  Romans 8:28  ", "[[Romans 8:28]]")]
#[case("Psalms 119:1, 1", "[[Psalms 119:1,1]]")]
#[case("James 4:0", "[[James 4]]")]
#[case("James 4:3-1", "[[James 4]]")]
#[case("James 4:1 and more", "[[James 4:1 and more]]")]
#[case("James 4:1a", "[[James 4:1a]]")]
#[case("James 4:1-2-3", "[[James 4:1-2-3]]")]
#[case("James 4:1-900,2", "[[James 4:2]]")]
fn renders_references(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render(input), expected);
}

/// Bracketed text is not a raw reference: it falls back to a plain wrap,
/// which adds exactly one more pair of delimiters.
#[test]
fn already_bracketed_text_is_wrapped_once_more() {
    assert_eq!(parse_reference("[[James 4:1]]"), None);
    assert_eq!(render("[[James 4:1]]"), "[[[[James 4:1]]]]");
}

#[test]
fn parse_reference_exposes_structure() {
    assert_eq!(
        parse_reference("Hebrews 11:1-3"),
        Some(ParsedReference {
            book: "Hebrews".to_string(),
            chapter: Some(11),
            verses: vec!["1".to_string(), "2".to_string(), "3".to_string()],
        })
    );
}

#[test]
fn jude_chapter_bounds() {
    assert_eq!(validate("Jude 1"), ValidationResult::valid());
    assert_eq!(
        validate("Jude 2"),
        ValidationResult::invalid("Chapter 2 not found in Jude (1-1)")
    );
}

#[rstest]
#[case("Genesis", true, "Valid reference")]
#[case("Genesis 50:26", true, "Valid reference")]
#[case("Genesis 51", false, "Chapter 51 not found in Genesis (1-50)")]
#[case("James 0", false, "Chapter 0 not found in James (1-5)")]
#[case("Obadiah 1:999", true, "Valid reference")]
#[case("Hezekiah 4", false, "Invalid reference format")]
#[case("James 4:1a", false, "Invalid reference format")]
#[case("James 4:1-2-3", false, "Invalid reference format")]
#[case("", false, "Invalid reference format")]
fn validation_messages(#[case] input: &str, #[case] is_valid: bool, #[case] message: &str) {
    let result = validate(input);
    assert_eq!(result.is_valid, is_valid);
    assert_eq!(result.message, message);
}

/// Rendering and validation never fail, whatever the input.
#[rstest]
#[case("")]
#[case("   ")]
#[case("::::")]
#[case("John 3:16-")]
#[case("Ésaïe 53:5")]
#[case("John 99999999999999999999")]
#[case("Psalms 1:1-99999999999")]
fn degrades_gracefully(#[case] input: &str) {
    let rendered = render(input);
    assert!(rendered.starts_with("[[") && rendered.ends_with("]]"));
    let _ = validate(input);
}
