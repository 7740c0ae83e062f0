//! Root component and SSR document shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the host server for every page load and carries
//! the backend endpoint configuration as `<meta>` tags. `App` provides the
//! shared `ChatSession` signal and mounts the router.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::config::{Endpoints, TEXT_ENDPOINT_META, VOICE_ENDPOINT_META};
use crate::pages::chat::ChatPage;
use crate::state::session::ChatSession;

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

const ICON_STYLESHEET: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Full HTML document for server-side rendering.
pub fn shell(options: LeptosOptions, endpoints: Endpoints) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <EndpointMeta endpoints=endpoints/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// `<meta>` pair read back by `Endpoints::resolve` after hydration.
#[component]
pub fn EndpointMeta(endpoints: Endpoints) -> impl IntoView {
    let Endpoints { text_url, voice_url } = endpoints;
    view! {
        <meta name=TEXT_ENDPOINT_META content=text_url/>
        <meta name=VOICE_ENDPOINT_META content=voice_url/>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ChatSession::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/voxchat.css"/>
        <Link rel="stylesheet" href=ICON_STYLESHEET/>
        <Title text="Voxchat"/>
        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=ChatPage/>
                </Routes>
            </main>
        </Router>
    }
}
