use crate::api::types::{EntityId, SceneEvent};
use crate::assets::registry::TextureRegistry;
use crate::core::clock::SceneClock;
use crate::core::scene::Scene;
use crate::systems::lighting::LightState;
use crate::systems::starfield::StarField;

/// Buffer capacities a scene declares up front.
///
/// These size the shared wire buffer once at init. A scene that spawns
/// past a capacity has its extra instances dropped at serialization time,
/// so declare the worst case here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    /// Maximum body instances per frame.
    pub max_bodies: usize,
    /// Maximum star points in the starfield.
    pub max_star_points: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum scene events per frame.
    pub max_events: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_bodies: 64,
            max_star_points: 1024,
            max_lights: 8,
            max_events: 32,
        }
    }
}

/// The trait a 3D scene implements to run on the engine.
///
/// The runner owns the loop: it calls `init` once, then `update` every
/// frame with the advancing clock. Scenes hold their own state and write
/// world state through the context.
pub trait Scene3 {
    /// Declare buffer capacities. Called once before `init`.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Populate the world: spawn entities, add lights, install the starfield.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Advance the scene by one frame.
    fn update(&mut self, ctx: &mut EngineContext, clock: &SceneClock);
}

/// Everything a scene reads and writes: entities, lights, the starfield,
/// texture bindings, and the per-frame event queue.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub textures: TextureRegistry,
    pub events: Vec<SceneEvent>,
    starfield: Option<StarField>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            lights: LightState::new(),
            textures: TextureRegistry::new(),
            events: Vec::new(),
            starfield: None,
            next_id: 1,
        }
    }

    /// Hand out the next entity id.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue an event for the host to drain this frame.
    pub fn emit_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Install the starfield. The field is generated once and kept for the
    /// lifetime of the scene; a second install is ignored with a warning.
    pub fn install_starfield(&mut self, field: StarField) {
        if self.starfield.is_some() {
            log::warn!("starfield already installed, ignoring replacement");
            return;
        }
        self.starfield = Some(field);
    }

    pub fn starfield(&self) -> Option<&StarField> {
        self.starfield.as_ref()
    }

    /// Reset per-frame state. Called by the runner at the top of each frame.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::rng::Rng;

    #[test]
    fn default_config_capacities() {
        let config = SceneConfig::default();
        assert_eq!(config.max_bodies, 64);
        assert_eq!(config.max_star_points, 1024);
        assert_eq!(config.max_lights, 8);
        assert_eq!(config.max_events, 32);
    }

    #[test]
    fn ids_are_sequential_and_unique() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn events_clear_each_frame() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(SceneEvent::new(1.0, 0.5, 0.0, 0.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn starfield_installs_once() {
        let mut ctx = EngineContext::new();
        let mut rng = Rng::new(7);
        ctx.install_starfield(StarField::generate(10, 0.0, 100.0, &mut rng));
        let first: Vec<f32> = ctx.starfield().unwrap().positions().to_vec();

        ctx.install_starfield(StarField::generate(20, 0.0, 100.0, &mut rng));
        let field = ctx.starfield().unwrap();
        assert_eq!(field.point_count(), 10);
        assert_eq!(field.positions(), first.as_slice());
    }
}
