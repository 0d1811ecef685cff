//! Tab switcher between the project and equipment views.

use leptos::prelude::*;

use crate::state::admin::{AdminState, AdminTab};

#[component]
pub fn AdminTabs(admin: RwSignal<AdminState>) -> impl IntoView {
    let tab_button = move |tab: AdminTab| {
        view! {
            <button
                class="admin-tabs__tab"
                class:admin-tabs__tab--active=move || admin.with(|s| s.tab == tab)
                on:click=move |_| admin.update(|s| s.select_tab(tab))
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="admin-tabs" role="tablist">
            {tab_button(AdminTab::Projects)}
            {tab_button(AdminTab::Equipment)}
        </div>
    }
}
