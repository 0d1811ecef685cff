//! Marketing landing page.

use leptos::prelude::*;

const SERVICES: [(&str, &str); 4] = [
    (
        "Site Installation",
        "End-to-end rollout of telecom sites, from civil works to commissioning.",
    ),
    (
        "Fiber Deployment",
        "Backbone and last-mile fiber builds with splicing and OTDR certification.",
    ),
    (
        "Network Maintenance",
        "Preventive and corrective maintenance programs for operator networks.",
    ),
    (
        "Green Energy Solutions",
        "Solar and hybrid power systems that cut site fuel use and emissions.",
    ),
];

const STATS: [(&str, &str); 3] = [("500+", "Sites delivered"), ("15+", "Operator partners"), ("24/7", "Field support")];

#[component]
pub fn HomePage() -> impl IntoView {
    let services = SERVICES
        .into_iter()
        .map(|(title, body)| {
            view! {
                <div class="service-card">
                    <h3 class="service-card__title">{title}</h3>
                    <p class="service-card__body">{body}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();
    let stats = STATS
        .into_iter()
        .map(|(value, label)| {
            view! {
                <div class="stat">
                    <span class="stat__value">{value}</span>
                    <span class="stat__label">{label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1 class="home-hero__title">"Building Sustainable Telecom Infrastructure"</h1>
                <p class="home-hero__lead">
                    "Eco Engineering delivers installation, fiber and maintenance services for "
                    "operators and OEMs across Sri Lanka."
                </p>
                <a class="btn btn--primary" href="/admin">"Manage Projects"</a>
            </section>
            <section class="home-section">
                <h2 class="home-section__title">"What We Do"</h2>
                <div class="home-services">{services}</div>
            </section>
            <section class="home-stats">{stats}</section>
        </div>
    }
}
