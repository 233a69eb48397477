use crate::api::types::EntityId;
use crate::components::surface::SurfaceComponent;
use glam::Vec3;

/// Fat Entity — a single struct with optional components.
/// Designed for simplicity and rapid prototyping over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Accumulated self-rotation about +Y, in radians.
    pub rotation: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Surface component (optional — entities without surfaces are invisible).
    pub surface: Option<SurfaceComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: 0.0,
            radius: 1.0,
            surface: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_surface(mut self, surface: SurfaceComponent) -> Self {
        self.surface = Some(surface);
        self
    }
}
