/// Body roster and scene constants for the Jupiter diorama.
///
/// Radii and orbit distances are stage units, not astronomy: the moons are
/// oversized and pulled in close so the whole system reads at a glance.

use crate::motion::BodyMotion;

/// Static description of one body in the diorama.
pub struct BodyDesc {
    pub name: &'static str,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Texture set name in the manifest.
    pub texture_set: &'static str,
    pub motion: BodyMotion,
}

pub const BODY_COUNT: usize = 6;

/// The six bodies of the diorama. Non-revolving bodies carry divisor 1 and
/// phase 0 as inert placeholders; `orbital_position` never reads them.
pub fn body_roster() -> [BodyDesc; BODY_COUNT] {
    [
        BodyDesc {
            name: "jupiter",
            radius: 1.0,
            texture_set: "jupiter",
            motion: BodyMotion {
                orbit_radius: 0.0,
                orbit_period_divisor: 1.0,
                phase_offset: 0.0,
                spin_period_divisor: 5.0,
                initial_position: (0.0, 0.0, 0.0),
            },
        },
        BodyDesc {
            name: "io",
            radius: 0.05,
            texture_set: "io",
            motion: BodyMotion {
                orbit_radius: 3.0,
                orbit_period_divisor: 3.0,
                phase_offset: 1.0,
                spin_period_divisor: 3.0,
                initial_position: (0.0, 0.0, 3.0),
            },
        },
        BodyDesc {
            name: "europa",
            radius: 0.08,
            texture_set: "europa",
            motion: BodyMotion {
                orbit_radius: 5.0,
                orbit_period_divisor: 5.0,
                phase_offset: 2.0,
                spin_period_divisor: 5.0,
                initial_position: (0.0, 0.0, 5.0),
            },
        },
        BodyDesc {
            name: "ganymede",
            radius: 0.10,
            texture_set: "ganymede",
            motion: BodyMotion {
                orbit_radius: 6.0,
                orbit_period_divisor: 6.0,
                phase_offset: 3.0,
                spin_period_divisor: 6.0,
                initial_position: (0.0, 0.0, 6.0),
            },
        },
        BodyDesc {
            name: "callisto",
            radius: 0.20,
            texture_set: "callisto",
            motion: BodyMotion {
                orbit_radius: 8.0,
                orbit_period_divisor: 8.0,
                phase_offset: 4.0,
                spin_period_divisor: 8.0,
                initial_position: (0.0, 0.0, 8.0),
            },
        },
        BodyDesc {
            name: "sun",
            radius: 1.0,
            texture_set: "sun",
            motion: BodyMotion {
                orbit_radius: 0.0,
                orbit_period_divisor: 1.0,
                phase_offset: 0.0,
                spin_period_divisor: 10.0,
                initial_position: (45.0, 0.0, 45.0),
            },
        },
    ]
}

// ── Lighting ─────────────────────────────────────────────────────────

/// White key light sitting between the camera and the sun sphere.
pub const LIGHT_POS: (f32, f32, f32) = (40.0, 0.0, 40.0);
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 1.0;
/// Zero range = no distance falloff.
pub const LIGHT_RANGE: f32 = 0.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 500;
pub const STAR_CENTER: f32 = 50.0;
pub const STAR_SPREAD: f32 = 1000.0;
pub const STAR_POINT_SIZE: f32 = 0.5;
/// Seed for the one-time starfield generation.
pub const STAR_SEED: u64 = 97;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_six_bodies() {
        assert_eq!(body_roster().len(), BODY_COUNT);
    }

    #[test]
    fn names_are_unique_and_match_texture_sets() {
        let roster = body_roster();
        for (i, body) in roster.iter().enumerate() {
            assert_eq!(body.name, body.texture_set);
            for other in &roster[i + 1..] {
                assert_ne!(body.name, other.name);
            }
        }
    }

    #[test]
    fn motion_parameters_are_sane() {
        for body in &body_roster() {
            assert!(body.radius > 0.0, "{}: radius", body.name);
            assert!(body.motion.orbit_radius >= 0.0, "{}: orbit", body.name);
            assert!(
                body.motion.orbit_period_divisor > 0.0,
                "{}: orbit divisor",
                body.name
            );
            assert!(
                body.motion.spin_period_divisor > 0.0,
                "{}: spin divisor",
                body.name
            );
        }
    }

    #[test]
    fn moons_start_at_their_orbit_distance_on_z() {
        for body in &body_roster() {
            if body.motion.orbit_radius > 0.0 {
                let (x, y, z) = body.motion.initial_position;
                assert_eq!((x, y), (0.0, 0.0), "{}", body.name);
                assert_eq!(z, body.motion.orbit_radius, "{}", body.name);
            }
        }
    }
}
