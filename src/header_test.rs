use super::*;

#[test]
fn top_of_page_is_not_scrolled() {
    assert!(!is_scrolled(0.0, 18.0));
}

#[test]
fn threshold_itself_is_not_scrolled() {
    assert!(!is_scrolled(18.0, 18.0));
    assert!(is_scrolled(18.5, 18.0));
}

#[test]
fn scrolled_effect_targets_header() {
    assert_eq!(
        scrolled_effect(400.0, 18.0),
        Effect::SetClass { target: Target::Header, class: "scrolled", on: true }
    );
    assert_eq!(
        scrolled_effect(3.0, 18.0),
        Effect::SetClass { target: Target::Header, class: "scrolled", on: false }
    );
}

#[test]
fn year_text_is_four_digits() {
    assert_eq!(year_text(2026), "2026");
    assert_eq!(year_text(999), "0999");
}
