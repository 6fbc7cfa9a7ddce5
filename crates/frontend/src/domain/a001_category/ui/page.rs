use super::category_form::CategoryForm;
use super::category_table::CategoryTable;
use super::edit_overlay::EditOverlay;
use crate::domain::a001_category::view_model::CategoryManagerVm;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

/// Category management screen: create form, list, rename overlay.
#[component]
pub fn CategoryManager() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");
    let vm = CategoryManagerVm::new(notifications);

    vm.load();

    let create_empty = Signal::derive({
        let name = vm.create_name();
        move || name.get().is_empty()
    });

    view! {
        <div id="a001_category--list" class="page" data-page-category="list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Manage Categories"</h1>
                </div>
            </div>

            <div class="page__content" style="max-width: 720px;">
                <div style="padding: 12px 0; max-width: 420px;">
                    <CategoryForm
                        value=vm.create_name()
                        on_input=Callback::new(move |v| vm.set_create_name(v))
                        on_submit=Callback::new(move |_| vm.create())
                        button_text="Create Category"
                        disabled=create_empty
                    />
                </div>

                <Show
                    when=move || vm.is_load_finished().get()
                    fallback=|| view! { <div class="loading">"Loading categories..."</div> }
                >
                    <CategoryTable
                        categories=vm.categories()
                        on_edit=Callback::new(move |category| vm.begin_edit(category))
                        on_delete=Callback::new(move |id| vm.remove(id))
                    />
                </Show>
            </div>

            <EditOverlay
                open=vm.is_editor_open()
                on_cancel=Callback::new(move |_| vm.close_editor())
            >
                <CategoryForm
                    value=vm.edit_name()
                    on_input=Callback::new(move |v| vm.set_edit_name(v))
                    on_submit=Callback::new(move |_| vm.submit_edit())
                    button_text="Update Category"
                />
            </EditOverlay>
        </div>
    }
}
