//! Toast-style tray for transient notices.

#[cfg(test)]
#[path = "notice_tray_test.rs"]
mod notice_tray_test;

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, NoticeState};

/// Queue `notice` on the tray and schedule its dismissal.
pub fn push_notice(notices: RwSignal<NoticeState>, notice: Notice) {
    let Some(id) = notices.try_update(|s| s.push(notice)) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let delay = u64::from(crate::state::notice::DISMISS_AFTER_MS);
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
        let _ = notices.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Push `notice` if there is one.
pub fn report(notices: RwSignal<NoticeState>, notice: Option<Notice>) {
    if let Some(notice) = notice {
        push_notice(notices, notice);
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    }
}

/// Fixed-position stack of active notices.
#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|queued| {
                        let id = queued.id;
                        view! {
                            <div class=notice_class(queued.notice.kind)>
                                <span class="notice__message">{queued.notice.message}</span>
                                <button
                                    class="notice__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| notices.update(|s| s.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
