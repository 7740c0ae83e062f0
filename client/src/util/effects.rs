//! Decorative particle field and confetti burst generators.
//!
//! Pure over any `rand::Rng` so layouts are reproducible in tests. Nothing
//! else in the widget reads these values.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 30;
pub const CONFETTI_COUNT: usize = 50;

const PARTICLE_COLORS: [&str; 3] = ["rgba(110, 69, 226, 0.7)", "rgba(0, 212, 255, 0.7)", "rgba(255, 255, 255, 0.5)"];
const CONFETTI_COLORS: [&str; 4] = ["#6e45e2", "#00d4ff", "#ffffff", "#8d6eff"];

/// One drifting background dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub color: &'static str,
}

impl Particle {
    /// Inline `style` attribute value.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; opacity: {opacity}; \
             animation-delay: {delay}s; animation-duration: {duration}s; background: {color};",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            opacity = self.opacity,
            delay = self.delay_s,
            duration = self.duration_s,
            color = self.color,
        )
    }
}

/// One falling confetti piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Confetti {
    pub size_px: f64,
    pub left_pct: f64,
    pub color: &'static str,
    pub rotation_deg: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub round: bool,
}

impl Confetti {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: -10px; background: {color}; \
             transform: rotate({rot}deg); border-radius: {radius}; \
             animation: confettiFall {duration}s ease-in {delay}s forwards;",
            size = self.size_px,
            left = self.left_pct,
            color = self.color,
            rot = self.rotation_deg,
            radius = if self.round { "50%" } else { "0" },
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// A burst: its pieces plus the keyframe rule they animate with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfettiBurst {
    pub pieces: Vec<Confetti>,
    pub keyframes: String,
}

fn pick<R: Rng>(rng: &mut R, colors: &[&'static str]) -> &'static str {
    colors[rng.random_range(0..colors.len())]
}

pub fn particle_field<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size_px: rng.random_range(1.0..6.0),
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            opacity: rng.random_range(0.1..0.6),
            delay_s: rng.random_range(0.0..15.0),
            duration_s: rng.random_range(10.0..30.0),
            color: pick(rng, &PARTICLE_COLORS),
        })
        .collect()
}

pub fn confetti_burst<R: Rng>(rng: &mut R, count: usize) -> ConfettiBurst {
    let pieces = (0..count)
        .map(|_| Confetti {
            size_px: rng.random_range(5.0..15.0),
            left_pct: rng.random_range(0.0..100.0),
            color: pick(rng, &CONFETTI_COLORS),
            rotation_deg: rng.random_range(0.0..360.0),
            duration_s: rng.random_range(1.0..3.0),
            delay_s: rng.random_range(0.0..0.5),
            round: rng.random_bool(0.5),
        })
        .collect();
    ConfettiBurst { pieces, keyframes: confetti_keyframes(rng.random_range(0.0..360.0)) }
}

/// `@keyframes confettiFall` ending at `final_rotation_deg`.
#[must_use]
pub fn confetti_keyframes(final_rotation_deg: f64) -> String {
    format!(
        "@keyframes confettiFall {{ to {{ transform: translateY(100vh) rotate({final_rotation_deg}deg); opacity: 0; }} }}"
    )
}

/// Non-cryptographic generator seeded from the clock where one is available.
#[must_use]
pub fn effect_rng() -> SmallRng {
    #[cfg(feature = "hydrate")]
    {
        SmallRng::seed_from_u64(js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SmallRng::seed_from_u64(0x5eed)
    }
}
