use super::*;

#[test]
fn parse_page_defaults_to_first() {
    assert_eq!(parse_page(None), 1);
    assert_eq!(parse_page(Some("abc")), 1);
    assert_eq!(parse_page(Some("0")), 1);
    assert_eq!(parse_page(Some(" 3 ")), 3);
}

#[test]
fn previous_only_after_first_page() {
    assert!(!has_previous(1));
    assert!(has_previous(2));
}

#[test]
fn next_while_rows_remain() {
    assert!(!has_next(0, 1));
    assert!(!has_next(10, 1));
    assert!(has_next(11, 1));
    assert!(has_next(25, 2));
    assert!(!has_next(25, 3));
}

#[test]
fn page_slice_windows_rows() {
    let rows: Vec<usize> = (0..25).collect();
    assert_eq!(page_slice(&rows, 1), &rows[0..10]);
    assert_eq!(page_slice(&rows, 3), &rows[20..25]);
    assert!(page_slice(&rows, 4).is_empty());
}
