use super::*;

#[test]
fn notice_constructors_set_kind() {
    assert_eq!(Notice::success("ok").kind, NoticeKind::Success);
    assert!(Notice::error("bad").is_error());
    assert!(!Notice::success("ok").is_error());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("a"));
    let b = state.push(Notice::success("b"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("a"));
    let _b = state.push(Notice::error("b"));
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].notice.message, "b");
}

#[test]
fn dismiss_unknown_id_is_ignored() {
    let mut state = NoticeState::default();
    state.push(Notice::success("a"));
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn queue_is_capped_and_drops_oldest() {
    let mut state = NoticeState::default();
    for i in 0..(MAX_VISIBLE + 3) {
        state.push(Notice::success(format!("n{i}")));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].notice.message, "n3");
    assert_eq!(state.items[MAX_VISIBLE - 1].notice.message, format!("n{}", MAX_VISIBLE + 2));
}

#[test]
fn ids_stay_unique_after_dismissal() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("a"));
    state.dismiss(a);
    let b = state.push(Notice::success("b"));
    assert_ne!(a, b);
}
