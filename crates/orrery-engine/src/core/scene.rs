use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Flat entity storage for a small, fixed cast of bodies.
///
/// Composition is static after init: bodies are spawned once and live for
/// the whole session, so there is no despawn path and lookups are plain
/// linear scans over a handful of entries.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(16),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Look up an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Look up an entity by ID, mutably.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// First entity carrying the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// First entity carrying the given tag, mutably.
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.tag == tag)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(10.0, 20.0, 30.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let scene = Scene::new();
        assert!(scene.get(EntityId(9)).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("jupiter"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("io"));
        let jupiter = scene.find_by_tag("jupiter").unwrap();
        assert_eq!(jupiter.id, EntityId(1));
    }

    #[test]
    fn tag_lookup_mutates_in_place() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("io"));
        scene.find_by_tag_mut("io").unwrap().rotation = 1.5;
        assert_eq!(scene.find_by_tag("io").unwrap().rotation, 1.5);
    }
}
