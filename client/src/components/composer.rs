//! Input row: record button, text field, send button.

use leptos::prelude::*;

use crate::state::session::ChatSession;

/// Text and voice controls. The page owns what happens on send/record.
#[component]
pub fn Composer(draft: RwSignal<String>, on_send: Callback<()>, on_record: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();

    let recording = move || session.with(|s| s.recorder.is_recording());
    let record_icon = move || session.with(|s| s.recorder.button_icon());

    let on_record_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_record.run(());
    };

    let on_send_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_send.run(());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            ev.stop_propagation();
            on_send.run(());
        }
    };

    view! {
        <div class="input-area">
            <button
                id="record-btn"
                class="record-btn"
                class:recording=recording
                type="button"
                title="Record a voice message"
                on:click=on_record_click
            >
                <i class=record_icon></i>
            </button>
            <input
                id="text-input"
                class="text-input"
                type="text"
                placeholder="Type your message..."
                autocomplete="off"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button id="send-btn" class="send-btn" type="button" title="Send" on:click=on_send_click>
                <i class="fas fa-paper-plane"></i>
            </button>
        </div>
    }
}
