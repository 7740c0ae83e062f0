//! Chat page: the widget's single screen.
//!
//! ARCHITECTURE
//! ============
//! The page turns DOM events into `chat_input` flows. It owns the text
//! draft, the HTTP backend and, in the browser, the slot holding the live
//! microphone capture between the two presses of the record button.
//!
//! TRADE-OFFS
//! ==========
//! Submissions are spawned and never awaited by the handler, so the UI stays
//! responsive; there is no client-side cancellation of an in-flight request.

use leptos::prelude::*;

use crate::components::chat_log::ChatLog;
use crate::components::composer::Composer;
use crate::components::particles::{ConfettiLayer, ParticleField};
use crate::components::status_bar::StatusBar;
use crate::config::Endpoints;
use crate::net::api::HttpBackend;
use crate::state::session::ChatSession;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let backend = StoredValue::new(HttpBackend::new(Endpoints::resolve()));
    let draft = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let capture_slot = StoredValue::new_local(None::<crate::util::recorder::MediaCapture>);

    let on_send = Callback::new(move |()| {
        let raw = draft.get_untracked();
        if raw.trim().is_empty() {
            return;
        }
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let backend = backend.get_value();
            crate::pages::chat_input::submit_text(&session, &backend, &raw).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (raw, backend, session);
        }
    });

    let on_record = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            use crate::pages::chat_input::{halt_recording, start_recording, upload_recording};
            use crate::state::recorder::RecorderPhase;
            use crate::util::recorder::BrowserMicrophone;

            match session.with_untracked(|s| s.recorder) {
                RecorderPhase::Idle => leptos::task::spawn_local(async move {
                    if let Some(capture) = start_recording(&session, &BrowserMicrophone).await {
                        capture_slot.set_value(Some(capture));
                    }
                }),
                RecorderPhase::Recording => {
                    let Some(mut capture) = capture_slot.try_update_value(Option::take).flatten() else {
                        session.update(|s| {
                            s.recording_stopped();
                        });
                        return;
                    };
                    halt_recording(&session, &mut capture);
                    let backend = backend.get_value();
                    leptos::task::spawn_local(async move {
                        upload_recording(&session, &backend, capture).await;
                    });
                }
                RecorderPhase::Starting => {}
            }
        }
    });

    view! {
        <div class="chat-page">
            <ParticleField/>
            <ConfettiLayer/>
            <div class="chat-container">
                <header class="chat-header">
                    <h1>"Voxchat"</h1>
                    <p class="chat-header__subtitle">"Type or talk. Replies arrive here."</p>
                </header>
                <ChatLog/>
                <StatusBar/>
                <Composer draft=draft on_send=on_send on_record=on_record/>
            </div>
        </div>
    }
}
