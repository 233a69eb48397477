use crate::assets::registry::TextureRegistry;
use crate::components::entity::Entity;
use crate::renderer::instance::{BodyBuffer, BodyInstance};

/// Build the body buffer from a set of entities.
///
/// Texture set names are resolved to slots here, every frame: a manifest
/// that arrives after the entities were spawned upgrades their instances
/// from the placeholder slot on the next build.
pub fn build_body_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    textures: &TextureRegistry,
    buffer: &mut BodyBuffer,
) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let surface = match &entity.surface {
            Some(s) => s,
            None => continue,
        };

        buffer.push(BodyInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rotation: entity.rotation,
            radius: entity.radius,
            texture_slot: textures.require(&surface.set),
            alpha: surface.alpha,
            _pad: 0.0,
        });
    }
}
