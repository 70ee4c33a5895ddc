use super::*;
use crate::fake_host::FakeHost;

#[test]
fn bar_styles_follow_open_flag() {
    assert_eq!(bar_styles(true), &OPEN_BARS);
    assert_eq!(bar_styles(false), &CLOSED_BARS);
}

#[test]
fn open_pose_forms_an_x() {
    assert_eq!(OPEN_BARS[0].value, "rotate(45deg) translate(5px, 5px)");
    assert_eq!(OPEN_BARS[1], BarStyle { property: "opacity", value: "0" });
    assert_eq!(OPEN_BARS[2].value, "rotate(-45deg) translate(5px, -5px)");
}

#[test]
fn toggle_opens_panel_and_folds_bars() {
    let mut state = NavState::new();
    let mut host = FakeHost::portfolio();

    assert!(toggle_menu(&mut state, &mut host));
    assert!(state.menu_open);
    assert!(host.panel_open);
    assert_eq!(host.bars, OPEN_BARS);
}

#[test]
fn double_toggle_restores_state_and_bars() {
    let mut state = NavState::new();
    let mut host = FakeHost::portfolio();
    let before_bars = host.bars;

    toggle_menu(&mut state, &mut host);
    assert!(!toggle_menu(&mut state, &mut host));

    assert!(!state.menu_open);
    assert!(!host.panel_open);
    assert_eq!(host.bars, before_bars);
}

#[test]
fn toggle_does_not_touch_pages_or_history() {
    let mut state = NavState::new();
    let mut host = FakeHost::portfolio();
    toggle_menu(&mut state, &mut host);
    assert!(host.active_pages().is_empty());
    assert!(host.pushed.is_empty());
    assert_eq!(state.active_page, None);
}
