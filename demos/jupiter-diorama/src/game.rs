/// Jupiter diorama scene: Jupiter and the four Galilean moons circling it,
/// a distant sun sphere with a key light, and a fixed starfield backdrop.

use glam::Vec3;
use orrery_engine::{
    EngineContext, Entity, EntityId, PointLight, Rng, Scene3, SceneClock, SceneConfig, SceneEvent,
    StarField, SurfaceComponent,
};

use crate::bodies::{
    body_roster, LIGHT_COLOR, LIGHT_INTENSITY, LIGHT_POS, LIGHT_RANGE, STAR_CENTER, STAR_COUNT,
    STAR_POINT_SIZE, STAR_SEED, STAR_SPREAD,
};
use crate::motion::{orbital_position, spin_step, BodyMotion};

// ── Scene event kinds to the host ────────────────────────────────────

/// Elapsed seconds in `a`, emitted once per frame.
pub const EVENT_TIME_INFO: f32 = 1.0;

pub struct JupiterDiorama {
    /// Entity handles paired with their motion parameters, filled at init.
    bodies: Vec<(EntityId, BodyMotion)>,
}

impl JupiterDiorama {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }
}

impl Default for JupiterDiorama {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene3 for JupiterDiorama {
    fn config(&self) -> SceneConfig {
        SceneConfig {
            max_bodies: 8,
            max_star_points: STAR_COUNT,
            max_lights: 4,
            max_events: 8,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        for desc in body_roster() {
            let id = ctx.next_id();
            let (x, y, z) = desc.motion.initial_position;
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(desc.name)
                    .with_pos(Vec3::new(x as f32, y as f32, z as f32))
                    .with_radius(desc.radius)
                    .with_surface(SurfaceComponent::new(desc.texture_set)),
            );
            self.bodies.push((id, desc.motion));
        }

        ctx.lights.add(PointLight::new(
            Vec3::new(LIGHT_POS.0, LIGHT_POS.1, LIGHT_POS.2),
            LIGHT_COLOR,
            LIGHT_INTENSITY,
            LIGHT_RANGE,
        ));

        let mut rng = Rng::new(STAR_SEED);
        ctx.install_starfield(
            StarField::generate(STAR_COUNT, STAR_CENTER, STAR_SPREAD, &mut rng)
                .with_point_size(STAR_POINT_SIZE),
        );

        log::info!("diorama populated: {} bodies", self.bodies.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, clock: &SceneClock) {
        let t = clock.elapsed();
        let dt = clock.dt();

        for (id, motion) in &self.bodies {
            if let Some(entity) = ctx.scene.get_mut(*id) {
                let (x, y, z) = orbital_position(motion, t);
                entity.pos = Vec3::new(x as f32, y as f32, z as f32);
                entity.rotation += spin_step(motion, dt) as f32;
            }
        }

        ctx.emit_event(SceneEvent::new(EVENT_TIME_INFO, t as f32, 0.0, 0.0));
    }
}
