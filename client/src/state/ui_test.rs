use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_flips_open_state() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState { open: true };
    menu.close();
    menu.close();
    assert!(!menu.open);
}
