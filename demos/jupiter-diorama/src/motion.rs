/// Circular orbit and spin math for diorama bodies. Pure math, no engine
/// dependencies.
///
/// Uses f64 throughout for precision over long sessions. Only convert to
/// f32 at the final wire-position step in game.rs.

/// Motion parameters for one body.
#[derive(Debug, Clone, Copy)]
pub struct BodyMotion {
    /// Orbit radius in world units. Zero means the body does not revolve.
    pub orbit_radius: f64,
    /// Seconds of elapsed time per radian of orbital angle.
    pub orbit_period_divisor: f64,
    /// Seconds added to elapsed time before dividing; staggers bodies that
    /// share a divisor.
    pub phase_offset: f64,
    /// Seconds of frame time per radian of self-rotation.
    pub spin_period_divisor: f64,
    /// Starting position. Fixed bodies stay here; revolving bodies keep
    /// only the y component as their orbit-plane height.
    pub initial_position: (f64, f64, f64),
}

/// Position of a body at absolute elapsed time `t` seconds.
///
/// Revolving bodies trace `x = r·sin θ`, `z = r·cos θ` with
/// `θ = (t + phase_offset) / orbit_period_divisor`. Because the angle is a
/// pure function of `t`, the orbit never drifts no matter how irregular the
/// frame deltas were.
pub fn orbital_position(motion: &BodyMotion, t: f64) -> (f64, f64, f64) {
    if motion.orbit_radius <= 0.0 {
        return motion.initial_position;
    }
    let theta = (t + motion.phase_offset) / motion.orbit_period_divisor;
    (
        motion.orbit_radius * theta.sin(),
        motion.initial_position.1,
        motion.orbit_radius * theta.cos(),
    )
}

/// Rotation increment for one frame of `dt` seconds. The caller accumulates
/// this onto the entity's rotation, integrating a constant angular velocity.
pub fn spin_step(motion: &BodyMotion, dt: f64) -> f64 {
    dt / motion.spin_period_divisor
}
