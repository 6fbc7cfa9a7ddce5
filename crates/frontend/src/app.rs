use crate::domain::a001_category::ui::CategoryManager;
use crate::layout::AdminLayout;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notifications are shared by every screen; provide once at the root.
    provide_context(NotificationService::new());

    view! {
        <AdminLayout title="Dashboard - Create Category">
            <CategoryManager />
        </AdminLayout>
        <NotificationHost />
    }
}
