use super::*;

#[test]
fn empty_layout_has_only_root() {
    let layout = PageLayout::default();
    assert!(layout.has(Target::Root));
    assert!(!layout.has(Target::Menu));
    assert!(!layout.has(Target::Travel));
    assert!(!layout.has(Target::RevealItem(0)));
}

#[test]
fn menu_needs_trigger_and_panel() {
    let layout = PageLayout { menu_button: true, ..PageLayout::default() };
    assert!(!layout.has_menu());
    assert!(PageLayout::full(vec![]).has_menu());
}

#[test]
fn reveal_items_are_counted_across_sections() {
    let layout = PageLayout::full(vec![2, 0, 3]);
    assert_eq!(layout.reveal_count(), 5);
    assert!(layout.has(Target::RevealItem(4)));
    assert!(!layout.has(Target::RevealItem(5)));
}

#[test]
fn effect_target_covers_every_variant() {
    let effects = [
        Effect::SetClass { target: Target::Header, class: "scrolled", on: true },
        Effect::SetAttribute { target: Target::Root, name: "data-theme", value: "dark".into() },
        Effect::SetText { target: Target::Year, text: "2026".into() },
        Effect::SetStyleProperty { target: Target::RevealItem(1), name: "--reveal-delay", value: "70ms".into() },
        Effect::Unobserve { watcher: Watcher::Reveal, target: Target::RevealItem(2) },
    ];
    let targets: Vec<Target> = effects.iter().map(Effect::target).collect();
    assert_eq!(
        targets,
        vec![Target::Header, Target::Root, Target::Year, Target::RevealItem(1), Target::RevealItem(2)]
    );
}
