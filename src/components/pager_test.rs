use super::*;

#[test]
fn label_shows_row_window_of_total() {
    let cursor = PageCursor {
        page: 2,
        count: 35,
        next: Some("/api/triggers/?page=3".to_owned()),
        previous: Some("/api/triggers/".to_owned()),
    };
    assert_eq!(window_label(&cursor), "Zobrazujem 11 - 20 z 35 záznamov");
}

#[test]
fn empty_table_has_notice() {
    assert_eq!(window_label(&PageCursor::default()), "Žiadne záznamy");
}
