pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::scene3::{EngineContext, Scene3, SceneConfig};
pub use api::types::{EntityId, SceneEvent};
pub use assets::manifest::{TextureManifest, TextureSetDescriptor};
pub use assets::registry::{ResolvedTextureSet, TextureRegistry, TextureSlot, PLACEHOLDER_SLOT};
pub use bridge::protocol::{
    ProtocolLayout, BODY_FLOATS, EVENT_FLOATS, HEADER_FLOATS, LIGHT_FLOATS, STAR_FLOATS,
};
pub use components::entity::Entity;
pub use components::surface::SurfaceComponent;
pub use crate::core::clock::SceneClock;
pub use crate::core::scene::Scene;
pub use renderer::instance::{BodyBuffer, BodyInstance};
pub use systems::lighting::{LightState, PointLight};
pub use systems::render::build_body_buffer;
pub use systems::rng::Rng;
pub use systems::starfield::StarField;
