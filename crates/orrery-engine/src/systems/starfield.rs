use crate::systems::rng::Rng;

/// A fixed random point cloud rendered as a background particle field.
///
/// Generated exactly once at scene construction and held for the scene's
/// lifetime: there is no mutating API, so a stored field can never be
/// regenerated. Positions are materialized as a flat f32 buffer (3 floats
/// per point) for direct SharedArrayBuffer reads.
pub struct StarField {
    positions: Vec<f32>,
    /// Texture set used for the point sprite.
    pub sprite_set: String,
    /// Rendered point size in world units (perspective-attenuated by the host).
    pub point_size: f32,
    /// Alpha-test threshold for the sprite texture.
    pub alpha_test: f32,
    /// Overall opacity.
    pub opacity: f32,
}

impl StarField {
    /// Generate `count` points, each coordinate sampled independently as
    /// `center + uniform(-spread/2, spread/2)`.
    pub fn generate(count: usize, center: f32, spread: f32, rng: &mut Rng) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        for _ in 0..count {
            positions.push(center + rng.float_spread(spread));
            positions.push(center + rng.float_spread(spread));
            positions.push(center + rng.float_spread(spread));
        }
        Self {
            positions,
            sprite_set: "star".to_string(),
            point_size: 1.0,
            alpha_test: 0.5,
            opacity: 1.0,
        }
    }

    // -- Builder pattern for display parameters --

    pub fn with_sprite_set(mut self, set: impl Into<String>) -> Self {
        self.sprite_set = set.into();
        self
    }

    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    pub fn with_alpha_test(mut self, threshold: f32) -> Self {
        self.alpha_test = threshold;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Number of points in the field.
    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Flat position buffer, 3 floats per point.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Raw pointer to position data for SharedArrayBuffer reads.
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exact_count() {
        let mut rng = Rng::new(42);
        let field = StarField::generate(500, 50.0, 1000.0, &mut rng);
        assert_eq!(field.point_count(), 500);
        assert_eq!(field.positions().len(), 1500);
    }

    #[test]
    fn coordinates_within_spread() {
        let mut rng = Rng::new(42);
        let field = StarField::generate(500, 50.0, 1000.0, &mut rng);
        for &c in field.positions() {
            assert!(c >= -450.0 && c < 550.0, "coordinate out of range: {}", c);
        }
    }

    #[test]
    fn successive_generations_differ() {
        let mut rng = Rng::new(42);
        let a = StarField::generate(500, 50.0, 1000.0, &mut rng);
        let b = StarField::generate(500, 50.0, 1000.0, &mut rng);
        assert_ne!(a.positions(), b.positions());
    }

    #[test]
    fn same_seed_reproduces_field() {
        let mut rng1 = Rng::new(7);
        let mut rng2 = Rng::new(7);
        let a = StarField::generate(100, 0.0, 10.0, &mut rng1);
        let b = StarField::generate(100, 0.0, 10.0, &mut rng2);
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn display_defaults() {
        let mut rng = Rng::new(1);
        let field = StarField::generate(1, 0.0, 1.0, &mut rng);
        assert_eq!(field.sprite_set, "star");
        assert_eq!(field.alpha_test, 0.5);
        assert_eq!(field.opacity, 1.0);
    }
}
