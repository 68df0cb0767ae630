use vmdl::{Error, Options, decode, decode_with_options};

fn syntax_line(input: &str) -> Option<usize> {
    match decode_with_options(input, &Options::strict()) {
        Err(Error::Syntax { line, .. }) => Some(line),
        _ => None,
    }
}

#[test]
fn strict_rejects_unrecognized_line() {
    let s = "A = 1\n\n# fine\njust words\n";
    assert_eq!(syntax_line(s), Some(4));
    let err = decode_with_options(s, &Options::strict()).unwrap_err();
    assert!(err.to_string().contains("just words"));
}

#[test]
fn lenient_accepts_what_strict_rejects() -> Result<(), Box<dyn std::error::Error>> {
    let s = "A = 1\njust words\n";
    let doc = decode_with_options(s, &Options::default())?;
    assert_eq!(doc, decode(s));
    assert_eq!(doc.len(), 1);
    Ok(())
}

#[test]
fn strict_rejects_child_shallower_than_sibling() {
    let s = "A:\n        B = 1\n    C = 2\n";
    assert_eq!(syntax_line(s), Some(3));
    let err = decode_with_options(s, &Options::strict()).unwrap_err();
    assert!(err.to_string().contains("inconsistent indentation"));
}

#[test]
fn strict_rejects_dedent_between_levels() {
    let s = "A:\n    B:\n        C = 1\n  D = 2\n";
    assert_eq!(syntax_line(s), Some(4));
}

#[test]
fn strict_rejects_mismatched_top_level_indent() {
    let s = "  A = 1\nB = 2\n";
    assert_eq!(syntax_line(s), Some(2));
}

#[test]
fn strict_accepts_well_formed_document() -> Result<(), Box<dyn std::error::Error>> {
    let s = "# settings\nA:\n    B:\n        C = 1\n\n    D = 2\nE = 3\nTabbed:\n\tF = 4\n";
    let doc = decode_with_options(s, &Options::strict())?;
    assert_eq!(doc, decode(s));
    Ok(())
}

#[test]
fn strict_ignores_comment_indentation() {
    let s = "A:\n    B = 1\n  # stray comment\n    C = 2\n";
    assert_eq!(syntax_line(s), None);
}

#[test]
fn reader_entry_point_reports_strict_errors() {
    let s = "A = 1\n???\n";
    let err = vmdl::decode_from_reader(s.as_bytes(), &Options::strict()).unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 2, .. }));
}
