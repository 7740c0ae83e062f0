//! Ambient particle field and success confetti.
//!
//! Both layers are generated after hydration only, so the server-rendered
//! markup stays deterministic.

use leptos::prelude::*;

use crate::state::session::ChatSession;
use crate::util::effects::{
    CONFETTI_COUNT, ConfettiBurst, PARTICLE_COUNT, Particle, confetti_burst, effect_rng, particle_field,
};

/// The `#particles` background.
#[component]
pub fn ParticleField() -> impl IntoView {
    let particles = RwSignal::new(Vec::<Particle>::new());

    Effect::new(move || {
        particles.set(particle_field(&mut effect_rng(), PARTICLE_COUNT));
    });

    view! {
        <div id="particles" class="particles">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect_view()
            }}
        </div>
    }
}

/// The `#particle-effect` overlay; bursts once per successful reply.
#[component]
pub fn ConfettiLayer() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let celebrations = Memo::new(move |_| session.with(|s| s.celebrations));
    let burst = RwSignal::new(ConfettiBurst::default());

    Effect::new(move || {
        if celebrations.get() > 0 {
            burst.set(confetti_burst(&mut effect_rng(), CONFETTI_COUNT));
        }
    });

    view! {
        <div id="particle-effect" class="particle-effect">
            {move || {
                let ConfettiBurst { pieces, keyframes } = burst.get();
                let pieces = pieces
                    .into_iter()
                    .map(|c| view! { <div class="confetti" style=c.style()></div> })
                    .collect_view();
                view! {
                    <style>{keyframes}</style>
                    {pieces}
                }
            }}
        </div>
    }
}
