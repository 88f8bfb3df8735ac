use bible_linker_engine::scan_and_convert_document;
use pretty_assertions::assert_eq;
use rstest::rstest;

const SERMON_NOTES: &str = "# Sermon notes

Opening text: James 4:1-2, then 1 John 4:8.
Already linked: [[John 3:16]] stays put.
Inline code `Romans 8:28` is left alone.
Whole book mention: Genesis tells the story; Psalms 23 comforts.
Same verse twice: Jude 1 and Jude 1.
Roman numerals: II Kings 2:11 and III John 1:4.
Out of range still links: Jude 2.";

#[test]
fn converts_sermon_notes() {
    let outcome = scan_and_convert_document(SERMON_NOTES);
    assert_eq!(outcome.count, 9);
    insta::assert_snapshot!("sermon_notes", outcome.result);
}

#[test]
fn second_pass_changes_nothing() {
    let first = scan_and_convert_document(SERMON_NOTES);
    let second = scan_and_convert_document(&first.result);
    assert_eq!(second.count, 0);
    assert_eq!(second.result, first.result);
}

#[rstest]
#[case("[[John 3:16]]")]
#[case("See [[1 John 4:8|God is love]] today")]
#[case("`Jude 1`")]
#[case("plain prose about a job in the acts of the apostles")]
fn leaves_text_untouched(#[case] document: &str) {
    let outcome = scan_and_convert_document(document);
    assert_eq!(outcome.result, document);
    assert_eq!(outcome.count, 0);
}

#[test]
fn count_matches_inserted_links() {
    let document = "Micah 6:8, Amos 5:24 and [[Isaiah 1:17]]; also Micah 6:8.";
    let outcome = scan_and_convert_document(document);
    assert_eq!(
        outcome.result,
        "[[Micah 6:8]], [[Amos 5:24]] and [[Isaiah 1:17]]; also [[Micah 6:8]]."
    );
    let links_added = outcome.result.matches("[[").count() - document.matches("[[").count();
    assert_eq!(outcome.count, links_added);
    assert_eq!(outcome.count, 3);
}

#[test]
fn repeated_reference_is_replaced_in_place() {
    let outcome = scan_and_convert_document("John 1 vs [[John 1]] vs John 1");
    assert_eq!(outcome.result, "[[John 1]] vs [[John 1]] vs [[John 1]]");
    assert_eq!(outcome.count, 2);
}

#[test]
fn unclosed_link_does_not_protect() {
    let outcome = scan_and_convert_document("[[draft Ruth 1");
    assert_eq!(outcome.result, "[[draft [[Ruth 1]]");
    assert_eq!(outcome.count, 1);
}
