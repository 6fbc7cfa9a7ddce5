pub mod admin_menu;

use admin_menu::AdminMenu;
use leptos::prelude::*;

/// Back-office page chrome.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  AdminMenu  |          Content           |
/// +------------------------------------------+
/// ```
#[component]
pub fn AdminLayout(
    /// Browser tab title
    title: &'static str,
    children: Children,
) -> impl IntoView {
    set_document_title(title);
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <header data-zone="header" class="header">
                <div class="header__content">
                    <span class="header__title">"Shop Admin"</span>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--ghost"
                        aria-label="Toggle Menu"
                        on:click=move |_| left_open.update(|open| *open = !*open)
                    >
                        {move || if left_open.get() { "◀" } else { "▶" }}
                    </button>
                </div>
            </header>
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !left_open.get()>
                    <AdminMenu />
                </div>
                <div class="app-main">{children()}</div>
            </div>
        </div>
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
