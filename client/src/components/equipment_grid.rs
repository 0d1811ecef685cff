//! Card grid of created equipment with per-card delete.

#[cfg(test)]
#[path = "equipment_grid_test.rs"]
mod equipment_grid_test;

use leptos::prelude::*;

use super::notice_tray::report;
use crate::state::admin::AdminState;
use crate::state::catalog::Equipment;
use crate::state::notice::NoticeState;
use crate::state::store::Repository;

/// Image source for a card, or `None` when the placeholder should render.
fn card_image(item: &Equipment) -> Option<&str> {
    item.image.as_deref().filter(|src| !src.is_empty())
}

#[component]
pub fn EquipmentGrid(admin: RwSignal<AdminState>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let items = move || admin.with(|s| s.equipment.list().to_vec());

    let card = move |item: Equipment| {
        let media = match card_image(&item) {
            Some(src) => view! { <img class="equipment-card__image" src=src.to_owned() alt=item.title.clone()/> }
                .into_any(),
            None => view! {
                <div class="equipment-card__placeholder" aria-hidden="true">"🖼"</div>
            }
            .into_any(),
        };
        let id = item.id;
        view! {
            <div class="equipment-card">
                {media}
                <h3 class="equipment-card__title">{item.title}</h3>
                <p class="equipment-card__description">{item.description}</p>
                <button
                    class="equipment-card__delete"
                    on:click=move |_| report(notices, admin.try_update(|s| s.delete_equipment(&id)).flatten())
                >
                    "🗑 Delete"
                </button>
            </div>
        }
    };

    view! {
        <div class="equipment-grid">
            <Show
                when=move || !items().is_empty()
                fallback=|| view! { <div class="equipment-grid__empty">"No equipment added yet"</div> }
            >
                {move || items().into_iter().map(card).collect::<Vec<_>>()}
            </Show>
        </div>
    }
}
