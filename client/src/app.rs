//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{admin::AdminPage, home::HomePage};
use crate::state::notice::NoticeState;

/// Root application component.
///
/// Provides the notice tray context and sets up client-side routing. Admin
/// data is not provided here: it lives and dies with the admin page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    provide_context(notices);

    view! {
        <Title text="Eco Engineering"/>
        <Meta
            name="description"
            content="Sustainable telecommunications infrastructure solutions for the digital future."
        />

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
