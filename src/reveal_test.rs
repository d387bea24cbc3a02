use super::*;

// =============================================================
// Stagger delay
// =============================================================

#[test]
fn delay_grows_by_step() {
    assert_eq!(stagger_delay_ms(0, 70, 280), 0);
    assert_eq!(stagger_delay_ms(1, 70, 280), 70);
    assert_eq!(stagger_delay_ms(4, 70, 280), 280);
}

#[test]
fn delay_is_capped() {
    assert_eq!(stagger_delay_ms(5, 70, 280), 280);
    assert_eq!(stagger_delay_ms(50, 70, 280), 280);
}

#[test]
fn huge_index_saturates_to_cap() {
    assert_eq!(stagger_delay_ms(usize::MAX, 70, 280), 280);
}

// =============================================================
// Tagging
// =============================================================

#[test]
fn tag_restarts_stagger_per_section() {
    let effects = RevealTracker::tag(&[2, 3], 70, 280);
    let delays: Vec<(Target, String)> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::SetStyleProperty { target, name: "--reveal-delay", value } => Some((*target, value.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        delays,
        vec![
            (Target::RevealItem(0), "0ms".to_owned()),
            (Target::RevealItem(1), "70ms".to_owned()),
            (Target::RevealItem(2), "0ms".to_owned()),
            (Target::RevealItem(3), "70ms".to_owned()),
            (Target::RevealItem(4), "140ms".to_owned()),
        ]
    );
}

#[test]
fn tag_adds_reveal_class_to_every_item() {
    let effects = RevealTracker::tag(&[1, 0, 2], 70, 280);
    let tagged = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::SetClass { class: "reveal", on: true, .. }))
        .count();
    assert_eq!(tagged, 3);
}

#[test]
fn tag_with_no_sections_is_empty() {
    assert!(RevealTracker::tag(&[], 70, 280).is_empty());
}

// =============================================================
// Fire-once reveal
// =============================================================

#[test]
fn reveal_marks_visible_and_unobserves() {
    let mut tracker = RevealTracker::new(3);
    let effects = tracker.reveal(1);
    assert_eq!(
        effects,
        vec![
            Effect::SetClass { target: Target::RevealItem(1), class: "is-visible", on: true },
            Effect::Unobserve { watcher: Watcher::Reveal, target: Target::RevealItem(1) },
        ]
    );
    assert!(tracker.is_visible(1));
    assert!(!tracker.is_visible(0));
}

#[test]
fn repeated_reveal_is_noop() {
    let mut tracker = RevealTracker::new(2);
    tracker.reveal(0);
    assert!(tracker.reveal(0).is_empty());
    assert!(tracker.is_visible(0));
    assert!(!tracker.is_visible(1));
}

#[test]
fn reveal_out_of_range_is_ignored() {
    let mut tracker = RevealTracker::new(2);
    assert!(tracker.reveal(7).is_empty());
    assert!(!tracker.is_visible(0));
    assert!(!tracker.is_visible(1));
}

#[test]
fn reveal_all_skips_already_visible() {
    let mut tracker = RevealTracker::new(3);
    tracker.reveal(2);
    let effects = tracker.reveal_all();
    assert_eq!(effects.len(), 2);
    assert!((0..3).all(|index| tracker.is_visible(index)));
    assert!(effects.iter().all(|effect| !matches!(effect, Effect::Unobserve { .. })));
}

#[test]
fn targets_cover_every_item() {
    let tracker = RevealTracker::new(2);
    assert_eq!(tracker.targets(), vec![Target::RevealItem(0), Target::RevealItem(1)]);
    assert_eq!(tracker.len(), 2);
    assert!(!tracker.is_empty());
}
