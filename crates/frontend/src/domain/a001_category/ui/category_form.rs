use leptos::ev;
use leptos::prelude::*;

/// Single-field category form, used for both create and rename.
///
/// The value and its setter belong to the caller; the form does no validation.
#[component]
pub fn CategoryForm(
    /// Current input value
    #[prop(into)]
    value: Signal<String>,
    /// Called on every keystroke with the new value
    on_input: Callback<String>,
    /// Called on Enter or button click
    on_submit: Callback<()>,
    button_text: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    /// Disables the submit button
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or("Enter new category");

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="category-form" on:submit=handle_submit>
            <div class="form-group">
                <input
                    type="text"
                    class="form-control"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="button button--primary"
                disabled=move || disabled.get().unwrap_or(false)
            >
                {button_text}
            </button>
        </form>
    }
}
