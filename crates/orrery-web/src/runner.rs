use orrery_engine::systems::render::build_body_buffer;
use orrery_engine::{
    BodyBuffer, EngineContext, ProtocolLayout, Scene3, SceneClock, TextureManifest,
    TextureRegistry, PLACEHOLDER_SLOT,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete scene (e.g., `jupiter-diorama`) creates a `thread_local!`
/// SceneRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<S: Scene3> {
    scene: S,
    ctx: EngineContext,
    clock: SceneClock,
    body_buffer: BodyBuffer,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<S: Scene3> SceneRunner<S> {
    pub fn new(scene: S) -> Self {
        let config = scene.config();
        let layout = ProtocolLayout::from_config(&config);
        let body_buffer = BodyBuffer::with_capacity(config.max_bodies);

        Self {
            scene,
            ctx: EngineContext::new(),
            clock: SceneClock::new(),
            body_buffer,
            layout,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.layout = ProtocolLayout::from_config(&self.scene.config());
        self.scene.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Parse a texture manifest and rebuild the name → slot registry.
    /// Safe to call at any point; entities spawned before the manifest
    /// arrives pick up their slots on the next buffer build.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.textures = TextureRegistry::from_manifest(&manifest);
                log::info!("texture manifest loaded: {} sets", self.ctx.textures.len());
            }
            Err(e) => {
                log::error!("failed to parse texture manifest: {}", e);
            }
        }
    }

    /// Run one frame tick: advance the clock, update the scene, rebuild
    /// the body buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.clock.advance(dt);
        self.scene.update(&mut self.ctx, &self.clock);

        // Build body buffer from entities, capped at the declared capacity
        build_body_buffer(self.ctx.scene.iter(), &self.ctx.textures, &mut self.body_buffer);
        self.body_buffer.instances.truncate(self.layout.max_bodies);
        self.ctx.events.truncate(self.layout.max_events);
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.body_buffer.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.body_buffer.instance_count()
    }

    pub fn star_positions_ptr(&self) -> *const f32 {
        match self.ctx.starfield() {
            Some(field) => field.positions_ptr(),
            None => std::ptr::null(),
        }
    }

    pub fn star_point_count(&self) -> u32 {
        let count = self
            .ctx
            .starfield()
            .map(|f| f.point_count())
            .unwrap_or(0);
        count.min(self.layout.max_star_points) as u32
    }

    pub fn star_point_size(&self) -> f32 {
        self.ctx.starfield().map(|f| f.point_size).unwrap_or(1.0)
    }

    pub fn star_alpha_test(&self) -> f32 {
        self.ctx.starfield().map(|f| f.alpha_test).unwrap_or(0.5)
    }

    pub fn star_opacity(&self) -> f32 {
        self.ctx.starfield().map(|f| f.opacity).unwrap_or(1.0)
    }

    /// Texture slot of the starfield point sprite.
    pub fn star_sprite_slot(&self) -> f32 {
        match self.ctx.starfield() {
            Some(field) => self.ctx.textures.require(&field.sprite_set),
            None => PLACEHOLDER_SLOT,
        }
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient()[2]
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_star_points(&self) -> u32 {
        self.layout.max_star_points as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{
        Entity, PointLight, Rng, SceneConfig, SceneEvent, StarField, SurfaceComponent,
    };

    struct TestScene;

    impl Scene3 for TestScene {
        fn config(&self) -> SceneConfig {
            SceneConfig {
                max_bodies: 4,
                max_star_points: 16,
                max_lights: 2,
                max_events: 4,
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("probe")
                    .with_surface(SurfaceComponent::new("probe")),
            );
            ctx.lights.add(PointLight::new(
                glam::Vec3::new(1.0, 2.0, 3.0),
                [1.0; 3],
                1.0,
                50.0,
            ));
            let mut rng = Rng::new(9);
            ctx.install_starfield(StarField::generate(8, 0.0, 10.0, &mut rng));
        }

        fn update(&mut self, ctx: &mut EngineContext, clock: &SceneClock) {
            if let Some(e) = ctx.scene.find_by_tag_mut("probe") {
                e.pos.x = clock.elapsed() as f32;
            }
            ctx.emit_event(SceneEvent::new(1.0, clock.elapsed() as f32, 0.0, 0.0));
        }
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = SceneRunner::new(TestScene);
        runner.tick(0.016);
        assert_eq!(runner.body_count(), 0);
        assert_eq!(runner.event_count(), 0);
    }

    #[test]
    fn session_lifecycle() {
        let mut runner = SceneRunner::new(TestScene);
        runner.init();
        runner.load_manifest(r#"{ "sets": { "probe": { "color": "probe.png" } } }"#);

        runner.tick(0.5);
        assert_eq!(runner.body_count(), 1);
        assert_eq!(runner.light_count(), 1);
        assert_eq!(runner.star_point_count(), 8);
        assert_eq!(runner.event_count(), 1);

        runner.tick(0.5);
        // Events are per-frame, not cumulative
        assert_eq!(runner.event_count(), 1);
    }

    #[test]
    fn capacities_come_from_the_scene_config() {
        let runner = SceneRunner::new(TestScene);
        assert_eq!(runner.max_bodies(), 4);
        assert_eq!(runner.max_star_points(), 16);
        assert_eq!(runner.max_lights(), 2);
        assert_eq!(runner.max_events(), 4);
    }

    #[test]
    fn bad_manifest_keeps_previous_registry() {
        let mut runner = SceneRunner::new(TestScene);
        runner.init();
        runner.load_manifest(r#"{ "sets": { "probe": { "color": "probe.png" } } }"#);
        runner.load_manifest("{ not json");

        runner.tick(0.016);
        assert_eq!(runner.body_count(), 1);
        // Slot resolved through the registry from the first, valid manifest
        assert_eq!(runner.body_buffer.instances[0].texture_slot, 0.0);
    }

    #[test]
    fn late_manifest_resolves_slots_on_next_tick() {
        let mut runner = SceneRunner::new(TestScene);
        runner.init();

        runner.tick(0.016);
        assert_eq!(runner.body_buffer.instances[0].texture_slot, PLACEHOLDER_SLOT);

        runner.load_manifest(r#"{ "sets": { "probe": { "color": "probe.png" } } }"#);
        runner.tick(0.016);
        assert_eq!(runner.body_buffer.instances[0].texture_slot, 0.0);
    }
}
