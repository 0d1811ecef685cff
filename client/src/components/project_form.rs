//! "Add New Project" form bound to the project draft.

use leptos::prelude::*;

use super::notice_tray::push_notice;
use crate::state::admin::AdminState;
use crate::state::draft::ProjectField;
use crate::state::notice::NoticeState;

/// Label, placeholder and input type for each project field, in form order.
const FIELDS: [(ProjectField, &str, &str, &str); 6] = [
    (ProjectField::ProjectName, "Project Name", "Enter project name", "text"),
    (ProjectField::Customer, "Customer", "Customer name", "text"),
    (ProjectField::Oem, "OEM", "OEM name", "text"),
    (ProjectField::Operator, "Operator", "Operator name", "text"),
    (ProjectField::Activity, "Activity", "e.g., Installation, Maintenance", "text"),
    (ProjectField::NoOfSites, "No. of Sites", "Number of sites", "number"),
];

#[component]
pub fn ProjectForm(admin: RwSignal<AdminState>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(notice) = admin.try_update(|s| s.submit_project()) {
            push_notice(notices, notice);
        }
    };

    let inputs = FIELDS
        .into_iter()
        .map(|(field, label, placeholder, input_type)| {
            view! {
                <label class="admin-form__field">
                    <span class="admin-form__label">{label}</span>
                    <input
                        class="admin-form__input"
                        type=input_type
                        min=(input_type == "number").then_some("0")
                        placeholder=placeholder
                        prop:value=move || admin.with(|s| s.project_draft.get(field).to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            admin.update(|s| s.project_draft.update(field, value));
                        }
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="admin-card admin-card--sticky">
            <h2 class="admin-card__title">"Add New Project"</h2>
            <form class="admin-form" on:submit=on_submit>
                {inputs}
                <button class="btn btn--primary admin-form__submit" type="submit">
                    "+ Add Project"
                </button>
            </form>
        </div>
    }
}
