//! Scrolling chat log: message bubbles plus the typing placeholder.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place `Bubble` values become DOM. It reads the shared
//! `ChatSession` and pins the scroll position to the bottom whenever the
//! rendered log grows or the typing placeholder toggles.

use leptos::prelude::*;

use crate::state::session::ChatSession;
use crate::state::view::{TYPING_DOTS, TYPING_LABEL};
use crate::util::bubble::{Avatar, Bubble};

/// The `#chat-box` log.
#[component]
pub fn ChatLog() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let log_ref = NodeRef::<leptos::html::Div>::new();

    let bubbles = move || session.with(|s| s.view.bubbles.clone());
    let typing = move || session.with(|s| s.view.typing);

    Effect::new(move || {
        let _ = session.with(|s| (s.view.bubbles.len(), s.view.typing));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = log_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div id="chat-box" class="chat-box" node_ref=log_ref>
            <For each=bubbles key=|bubble| bubble.id children=move |bubble| view! { <MessageBubble bubble=bubble/> }/>
            <Show when=typing>
                <TypingIndicator/>
            </Show>
        </div>
    }
}

/// One rendered turn: avatar, rich content, optional voice reply, timestamp.
#[component]
pub fn MessageBubble(bubble: Bubble) -> impl IntoView {
    let Bubble { side, avatar, html, audio_url, time_label, .. } = bubble;
    view! {
        <div class=format!("message {}", side.class())>
            <div class="avatar">
                <i class=avatar.icon_class()></i>
            </div>
            <div class="bubble">
                <div class="bubble-content" inner_html=html></div>
                {audio_url.map(|src| view! {
                    <br/>
                    <audio src=src controls=true></audio>
                })}
                <div class="message-time">{time_label}</div>
            </div>
        </div>
    }
}

/// Animated "AI is responding..." placeholder.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div id="typing-indicator" class="message ai">
            <div class="avatar">
                <i class=Avatar::Robot.icon_class()></i>
            </div>
            <div class="bubble typing-indicator">
                <div class="typing-text">{TYPING_LABEL}</div>
                {(0..TYPING_DOTS).map(|_| view! { <div class="typing-dot"></div> }).collect_view()}
            </div>
        </div>
    }
}
