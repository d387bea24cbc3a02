use super::*;

fn attribute(effects: &[Effect], name: &str) -> Option<String> {
    effects.iter().find_map(|effect| match effect {
        Effect::SetAttribute { name: n, value, .. } if *n == name => Some(value.clone()),
        _ => None,
    })
}

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_and_updates_aria() {
    let mut menu = MenuState::default();
    let effects = menu.toggle();
    assert!(menu.is_open());
    assert!(effects.contains(&Effect::SetClass { target: Target::Menu, class: "open", on: true }));
    assert_eq!(attribute(&effects, "aria-expanded").as_deref(), Some("true"));
    assert_eq!(attribute(&effects, "aria-label").as_deref(), Some("Close menu"));
}

#[test]
fn second_toggle_closes() {
    let mut menu = MenuState::default();
    menu.toggle();
    let effects = menu.toggle();
    assert!(!menu.is_open());
    assert!(effects.contains(&Effect::SetClass { target: Target::Menu, class: "open", on: false }));
    assert_eq!(attribute(&effects, "aria-expanded").as_deref(), Some("false"));
    assert_eq!(attribute(&effects, "aria-label").as_deref(), Some("Open menu"));
}

#[test]
fn close_when_closed_is_noop() {
    let mut menu = MenuState::default();
    assert!(menu.close().is_empty());
    assert!(!menu.is_open());
}

#[test]
fn close_when_open_emits_closed_state() {
    let mut menu = MenuState::default();
    menu.toggle();
    let effects = menu.close();
    assert_eq!(effects.len(), 3);
    assert!(!menu.is_open());
}

#[test]
fn only_escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(!is_dismiss_key("Esc"));
    assert!(!is_dismiss_key("Enter"));
}
