//! "Add Equipment" form with an inline image preview.

use leptos::prelude::*;

use super::notice_tray::push_notice;
use crate::state::admin::AdminState;
use crate::state::draft::EquipmentField;
use crate::state::notice::NoticeState;

#[component]
pub fn EquipmentForm(admin: RwSignal<AdminState>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(notice) = admin.try_update(|s| s.submit_equipment()) else {
            return;
        };
        if !notice.is_error() {
            clear_file_input(file_input);
        }
        push_notice(notices, notice);
    };

    // The read completes later; a submit or removal in the meantime makes its result stale.
    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Some(generation) = admin.try_update(|s| s.begin_image_read()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::util::image::load_as_data_url(&file).await;
                let notice = admin.try_update(|s| s.apply_image(generation, result)).flatten();
                super::notice_tray::report(notices, notice);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_clear_image = move |_| {
        admin.update(|s| s.equipment_draft.clear_image());
        clear_file_input(file_input);
    };

    let preview = move || admin.with(|s| s.equipment_draft.image.clone());

    view! {
        <div class="admin-card admin-card--sticky">
            <h2 class="admin-card__title">"Add Equipment"</h2>
            <form class="admin-form" on:submit=on_submit>
                <label class="admin-form__field">
                    <span class="admin-form__label">"Title"</span>
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder="Equipment title"
                        prop:value=move || admin.with(|s| s.equipment_draft.get(EquipmentField::Title).to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            admin.update(|s| s.equipment_draft.update(EquipmentField::Title, value));
                        }
                    />
                </label>
                <label class="admin-form__field">
                    <span class="admin-form__label">"Description"</span>
                    <textarea
                        class="admin-form__input admin-form__textarea"
                        rows="4"
                        placeholder="Equipment description"
                        prop:value=move || {
                            admin.with(|s| s.equipment_draft.get(EquipmentField::Description).to_owned())
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            admin.update(|s| s.equipment_draft.update(EquipmentField::Description, value));
                        }
                    ></textarea>
                </label>
                <label class="admin-form__field">
                    <span class="admin-form__label">"Image"</span>
                    <input
                        class="admin-form__input admin-form__file"
                        type="file"
                        accept="image/*"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </label>
                <Show when=move || preview().is_some()>
                    <div class="admin-form__preview">
                        <img
                            class="admin-form__preview-img"
                            alt="Preview"
                            src=move || preview().unwrap_or_default()
                        />
                        <button
                            class="admin-form__preview-clear"
                            type="button"
                            aria-label="Remove image"
                            on:click=on_clear_image
                        >
                            "✕"
                        </button>
                    </div>
                </Show>
                <button class="btn btn--primary admin-form__submit" type="submit">
                    "+ Add Equipment"
                </button>
            </form>
        </div>
    }
}

/// Reset the file picker so the same file can be chosen again.
fn clear_file_input(file_input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = file_input;
}
