//! Status line under the chat log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors `ChatSession::status`: the text is inserted as markup and the
//! `active`/`error` flags map onto CSS modifier classes.

use leptos::prelude::*;

use crate::state::session::ChatSession;

/// The `#status` line.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();

    let text = move || session.with(|s| s.status.text.clone());
    let active = move || session.with(|s| s.status.active);
    let error = move || session.with(|s| s.status.error);

    view! {
        <div id="status" class="status" class:active=active class:error=error inner_html=text></div>
    }
}
