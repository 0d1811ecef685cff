//! Admin page for managing projects and equipment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page creates a fresh, seeded `AdminState` on every mount, so lists
//! edited here vanish when the visitor navigates away or reloads.

use leptos::prelude::*;

use crate::components::admin_tabs::AdminTabs;
use crate::components::equipment_form::EquipmentForm;
use crate::components::equipment_grid::EquipmentGrid;
use crate::components::project_form::ProjectForm;
use crate::components::project_table::ProjectTable;
use crate::state::admin::{AdminState, AdminTab};

#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = RwSignal::new(AdminState::seeded());
    let tab = move || admin.with(|s| s.tab);

    view! {
        <div class="admin-page">
            <div class="admin-page__hero">
                <h1>"Admin Panel"</h1>
                <p class="admin-page__subtitle">"Manage projects and equipment data"</p>
            </div>
            <div class="admin-page__content">
                <AdminTabs admin=admin/>
                <Show
                    when=move || tab() == AdminTab::Projects
                    fallback=move || view! {
                        <div class="admin-page__grid">
                            <EquipmentForm admin=admin/>
                            <EquipmentGrid admin=admin/>
                        </div>
                    }
                >
                    <div class="admin-page__grid">
                        <ProjectForm admin=admin/>
                        <ProjectTable admin=admin/>
                    </div>
                </Show>
            </div>
        </div>
    }
}
