//! Table of created projects with per-row delete.

use leptos::prelude::*;

use super::notice_tray::report;
use crate::state::admin::AdminState;
use crate::state::catalog::Project;
use crate::state::notice::NoticeState;
use crate::state::store::Repository;

const COLUMNS: [&str; 7] = ["Project Name", "Customer", "OEM", "Operator", "Activity", "Sites", "Action"];

#[component]
pub fn ProjectTable(admin: RwSignal<AdminState>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let projects = move || admin.with(|s| s.projects.list().to_vec());

    let row = move |project: Project| {
        let id = project.id;
        view! {
            <tr class="admin-table__row">
                <td>{project.project_name}</td>
                <td>{project.customer}</td>
                <td>{project.oem}</td>
                <td>{project.operator}</td>
                <td>{project.activity}</td>
                <td>{project.no_of_sites}</td>
                <td>
                    <button
                        class="admin-table__delete"
                        title="Delete project"
                        aria-label="Delete project"
                        on:click=move |_| report(notices, admin.try_update(|s| s.delete_project(&id)).flatten())
                    >
                        "🗑"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="admin-card admin-card--flush">
            <div class="admin-table__scroll">
                <table class="admin-table">
                    <thead>
                        <tr>{COLUMNS.into_iter().map(|c| view! { <th>{c}</th> }).collect::<Vec<_>>()}</tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !projects().is_empty()
                            fallback=|| view! {
                                <tr>
                                    <td class="admin-table__empty" colspan="7">"No projects added yet"</td>
                                </tr>
                            }
                        >
                            {move || projects().into_iter().map(row).collect::<Vec<_>>()}
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
