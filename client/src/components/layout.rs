//! Site chrome: header navigation, mobile menu, footer and notice tray.

use leptos::prelude::*;

use super::notice_tray::NoticeTray;
use crate::state::ui::MenuState;

const NAV_LINKS: [(&str, &str); 2] = [("/", "Home"), ("/admin", "Admin Panel")];

/// Shared page frame around the routed content.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    let desktop_links = NAV_LINKS
        .iter()
        .map(|(href, label)| view! { <a class="site-nav__link" href=*href>{*label}</a> })
        .collect::<Vec<_>>();
    let mobile_links = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            view! {
                <a class="site-nav__link site-nav__link--mobile" href=*href on:click=move |_| menu.update(MenuState::close)>
                    {*label}
                </a>
            }
        })
        .collect::<Vec<_>>();
    let quick_links = NAV_LINKS
        .iter()
        .map(|(href, label)| view! { <li><a class="site-footer__link" href=*href>{*label}</a></li> })
        .collect::<Vec<_>>();

    view! {
        <div class="site">
            <header class="site-header">
                <div class="site-header__bar">
                    <a class="site-header__brand" href="/">
                        <span class="site-header__logo">"EC"</span>
                        <span class="site-header__name">"Eco Engineering"</span>
                    </a>
                    <nav class="site-nav site-nav--desktop">{desktop_links}</nav>
                    <button
                        class="site-header__menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        {move || if menu.get().open { "✕" } else { "☰" }}
                    </button>
                </div>
                <nav class="site-nav site-nav--mobile" class:site-nav--open=move || menu.get().open>
                    {mobile_links}
                </nav>
            </header>

            <main class="site-main">{children()}</main>

            <footer class="site-footer">
                <div class="site-footer__grid">
                    <div>
                        <h3>"Eco Engineering"</h3>
                        <p class="site-footer__muted">
                            "Sustainable telecommunications infrastructure solutions for the digital future."
                        </p>
                    </div>
                    <div>
                        <h4>"Quick Links"</h4>
                        <ul class="site-footer__links">{quick_links}</ul>
                    </div>
                    <div>
                        <h4>"Contact"</h4>
                        <p class="site-footer__muted">
                            "Waliwita Junction, Kaduwela" <br/> "011 234 5678" <br/> "info@ecoengineering.com"
                        </p>
                    </div>
                </div>
                <p class="site-footer__copyright">"© 2024 Eco Engineering. All Rights Reserved."</p>
            </footer>

            <NoticeTray/>
        </div>
    }
}
