/// One row of the built-in canon table.
pub(crate) struct BookRow {
    pub ordinal: &'static str,
    pub name: &'static str,
    pub chapters: u32,
    pub spellings: &'static [&'static str],
}

const fn book(
    ordinal: &'static str,
    name: &'static str,
    chapters: u32,
    spellings: &'static [&'static str],
) -> BookRow {
    BookRow {
        ordinal,
        name,
        chapters,
        spellings,
    }
}

/// The 66 books of the Protestant canon with their accepted spellings.
///
/// The first spelling of each row is the canonical display name.
pub(crate) const STANDARD_BOOKS: &[BookRow] = &[
    // Old Testament
    book("01", "Genesis", 50, &["Genesis"]),
    book("02", "Exodus", 40, &["Exodus"]),
    book("03", "Leviticus", 27, &["Leviticus"]),
    book("04", "Numbers", 36, &["Numbers"]),
    book("05", "Deuteronomy", 34, &["Deuteronomy"]),
    book("06", "Joshua", 24, &["Joshua"]),
    book("07", "Judges", 21, &["Judges"]),
    book("08", "Ruth", 4, &["Ruth"]),
    book("09", "1 Samuel", 31, &["1 Samuel", "I Samuel"]),
    book("10", "2 Samuel", 24, &["2 Samuel", "II Samuel"]),
    book("11", "1 Kings", 22, &["1 Kings", "I Kings"]),
    book("12", "2 Kings", 25, &["2 Kings", "II Kings"]),
    book("13", "1 Chronicles", 29, &["1 Chronicles", "I Chronicles"]),
    book("14", "2 Chronicles", 36, &["2 Chronicles", "II Chronicles"]),
    book("15", "Ezra", 10, &["Ezra"]),
    book("16", "Nehemiah", 13, &["Nehemiah"]),
    book("17", "Esther", 10, &["Esther"]),
    book("18", "Job", 42, &["Job"]),
    book("19", "Psalms", 150, &["Psalms"]),
    book("20", "Proverbs", 31, &["Proverbs"]),
    book("21", "Ecclesiastes", 12, &["Ecclesiastes"]),
    book(
        "22",
        "Song of Solomon",
        8,
        &["Song of Solomon", "Song of Songs"],
    ),
    book("23", "Isaiah", 66, &["Isaiah"]),
    book("24", "Jeremiah", 52, &["Jeremiah"]),
    book("25", "Lamentations", 5, &["Lamentations"]),
    book("26", "Ezekiel", 48, &["Ezekiel"]),
    book("27", "Daniel", 12, &["Daniel"]),
    book("28", "Hosea", 14, &["Hosea"]),
    book("29", "Joel", 3, &["Joel"]),
    book("30", "Amos", 9, &["Amos"]),
    book("31", "Obadiah", 1, &["Obadiah"]),
    book("32", "Jonah", 4, &["Jonah"]),
    book("33", "Micah", 7, &["Micah"]),
    book("34", "Nahum", 3, &["Nahum"]),
    book("35", "Habakkuk", 3, &["Habakkuk"]),
    book("36", "Zephaniah", 3, &["Zephaniah"]),
    book("37", "Haggai", 2, &["Haggai"]),
    book("38", "Zechariah", 14, &["Zechariah"]),
    book("39", "Malachi", 4, &["Malachi"]),
    // New Testament
    book("40", "Matthew", 28, &["Matthew"]),
    book("41", "Mark", 16, &["Mark"]),
    book("42", "Luke", 24, &["Luke"]),
    book("43", "John", 21, &["John"]),
    book("44", "Acts", 28, &["Acts"]),
    book("45", "Romans", 16, &["Romans"]),
    book("46", "1 Corinthians", 16, &["1 Corinthians", "I Corinthians"]),
    book("47", "2 Corinthians", 13, &["2 Corinthians", "II Corinthians"]),
    book("48", "Galatians", 6, &["Galatians"]),
    book("49", "Ephesians", 6, &["Ephesians"]),
    book("50", "Philippians", 4, &["Philippians"]),
    book("51", "Colossians", 4, &["Colossians"]),
    book(
        "52",
        "1 Thessalonians",
        5,
        &["1 Thessalonians", "I Thessalonians"],
    ),
    book(
        "53",
        "2 Thessalonians",
        3,
        &["2 Thessalonians", "II Thessalonians"],
    ),
    book("54", "1 Timothy", 6, &["1 Timothy", "I Timothy"]),
    book("55", "2 Timothy", 4, &["2 Timothy", "II Timothy"]),
    book("56", "Titus", 3, &["Titus"]),
    book("57", "Philemon", 1, &["Philemon"]),
    book("58", "Hebrews", 13, &["Hebrews"]),
    book("59", "James", 5, &["James"]),
    book("60", "1 Peter", 5, &["1 Peter", "I Peter"]),
    book("61", "2 Peter", 3, &["2 Peter", "II Peter"]),
    book("62", "1 John", 5, &["1 John", "I John"]),
    book("63", "2 John", 1, &["2 John", "II John"]),
    book("64", "3 John", 1, &["3 John", "III John"]),
    book("65", "Jude", 1, &["Jude"]),
    book("66", "Revelation", 22, &["Revelation", "Revelations"]),
];
