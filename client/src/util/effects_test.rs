use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

#[test]
fn particle_field_respects_ranges() {
    let mut rng = SmallRng::seed_from_u64(7);
    let particles = particle_field(&mut rng, PARTICLE_COUNT);
    assert_eq!(particles.len(), 30);
    for p in &particles {
        assert!((1.0..6.0).contains(&p.size_px));
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((0.1..0.6).contains(&p.opacity));
        assert!((0.0..15.0).contains(&p.delay_s));
        assert!((10.0..30.0).contains(&p.duration_s));
        assert!(PARTICLE_COLORS.contains(&p.color));
    }
}

#[test]
fn confetti_burst_respects_ranges() {
    let mut rng = SmallRng::seed_from_u64(11);
    let burst = confetti_burst(&mut rng, CONFETTI_COUNT);
    assert_eq!(burst.pieces.len(), 50);
    for c in &burst.pieces {
        assert!((5.0..15.0).contains(&c.size_px));
        assert!((0.0..360.0).contains(&c.rotation_deg));
        assert!((1.0..3.0).contains(&c.duration_s));
        assert!((0.0..0.5).contains(&c.delay_s));
        assert!(CONFETTI_COLORS.contains(&c.color));
    }
    assert!(burst.keyframes.starts_with("@keyframes confettiFall"));
}

#[test]
fn same_seed_gives_same_layout() {
    let a = particle_field(&mut SmallRng::seed_from_u64(3), 5);
    let b = particle_field(&mut SmallRng::seed_from_u64(3), 5);
    assert_eq!(a, b);
}

#[test]
fn confetti_style_encodes_shape_and_animation() {
    let piece = Confetti {
        size_px: 8.0,
        left_pct: 50.0,
        color: "#ffffff",
        rotation_deg: 90.0,
        duration_s: 2.0,
        delay_s: 0.25,
        round: true,
    };
    let style = piece.style();
    assert!(style.contains("width: 8px; height: 8px;"));
    assert!(style.contains("top: -10px;"));
    assert!(style.contains("border-radius: 50%;"));
    assert!(style.contains("animation: confettiFall 2s ease-in 0.25s forwards;"));
}

#[test]
fn keyframes_embed_final_rotation() {
    assert_eq!(
        confetti_keyframes(45.0),
        "@keyframes confettiFall { to { transform: translateY(100vh) rotate(45deg); opacity: 0; } }"
    );
}
