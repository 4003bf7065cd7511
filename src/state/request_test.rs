use super::*;

#[test]
fn only_newest_ticket_is_current() {
    let mut latest = LatestRequest::default();
    let first = latest.begin();
    let second = latest.begin();
    assert!(!latest.is_current(first));
    assert!(latest.is_current(second));
}

#[test]
fn earlier_page_reply_is_dropped_after_quick_paging() {
    // Page 2 then page 3 requested back to back; page 2 answers last.
    let mut latest = LatestRequest::default();
    let page_two = latest.begin();
    let page_three = latest.begin();
    let mut shown = None;
    for (ticket, page) in [(page_three, 3), (page_two, 2)] {
        if latest.is_current(ticket) {
            shown = Some(page);
        }
    }
    assert_eq!(shown, Some(3));
}

#[test]
fn tickets_are_never_reused() {
    let mut latest = LatestRequest::default();
    let ticket = latest.begin();
    assert!(!latest.is_current(0));
    assert!(latest.is_current(ticket));
}
