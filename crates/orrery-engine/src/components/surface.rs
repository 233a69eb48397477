/// Surface component — defines how a body's sphere is textured.
///
/// Names a texture set from the manifest rather than holding a resolved
/// slot: resolution happens at buffer-build time, so a set that becomes
/// known after the entity was spawned (manifest arriving late) upgrades
/// from the placeholder slot on the next frame.
#[derive(Debug, Clone)]
pub struct SurfaceComponent {
    /// Name of the texture set in the manifest (e.g., "jupiter").
    pub set: String,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SurfaceComponent {
    /// Create a surface referencing the given texture set, fully opaque.
    pub fn new(set: impl Into<String>) -> Self {
        Self {
            set: set.into(),
            alpha: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for SurfaceComponent {
    fn default() -> Self {
        Self {
            set: String::new(),
            alpha: 1.0,
        }
    }
}
