use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dismissible modal hosting the rename form.
///
/// Rendered while `open` is true. Backdrop click, Escape and the Cancel button
/// all call `on_cancel`; the caller decides what closing means.
#[component]
pub fn EditOverlay(
    #[prop(into)] open: Signal<bool>,
    on_cancel: Callback<()>,
    #[prop(optional)] title: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = title.unwrap_or("Edit category");
    let overlay_mouse_down = RwSignal::new(false);

    // Defer to the next tick: the overlay may be removed during its own event dispatch.
    let cancel_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_cancel.run(());
        });
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.try_get_untracked().unwrap_or(false) {
            cancel_deferred();
        }
    });
    on_cleanup(move || escape.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the backdrop itself.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            cancel_deferred();
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-overlay"
                style="z-index: 1000;"
                on:mousedown=handle_overlay_mouse_down
                on:click=handle_overlay_click
            >
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    style="position: relative; max-width: min(520px, 95vw); width: min(520px, 95vw);"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <div class="details-header">
                        <h3>{title}</h3>
                    </div>
                    {children()}
                    <div class="details-actions">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| cancel_deferred()
                        >
                            {icon("cancel")}
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
