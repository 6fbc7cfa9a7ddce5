use crate::shared::icons;
use leptos::prelude::*;

/// Back-office sections; only categories live in this app.
const SECTIONS: &[(&str, &str)] = &[("categories", "Create Category")];

#[component]
pub fn AdminMenu() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <h4 class="main-nav-bar__title">"Admin Panel"</h4>
            <ul>
                {SECTIONS.iter().map(|(key, title)| {
                    view! {
                        <li class="main-nav-bar__item main-nav-bar__item--active">
                            {icons::icon(key)}
                            <span>{*title}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
