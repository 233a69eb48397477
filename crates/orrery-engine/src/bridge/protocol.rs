//! SharedArrayBuffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Bodies: max_bodies × 8 floats]
//! [Star positions: max_star_points × 3 floats]
//! [Lights: max_lights × 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::scene3::SceneConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_MAX_STAR_POINTS: usize = 4;
pub const HEADER_STAR_POINT_COUNT: usize = 5;
pub const HEADER_MAX_LIGHTS: usize = 6;
pub const HEADER_LIGHT_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_PROTOCOL_VERSION: usize = 10;
// Indices 11-15 are reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance (wire format — never changes).
pub const BODY_FLOATS: usize = 8;

/// Floats per star point: x, y, z (wire format — never changes).
pub const STAR_FLOATS: usize = 3;

/// Floats per point light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per scene event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout from the scene's configured capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body instances.
    pub max_bodies: usize,
    /// Maximum star points.
    pub max_star_points: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum scene events per frame.
    pub max_events: usize,

    /// Size of body data section in floats.
    pub body_data_floats: usize,
    /// Size of star data section in floats.
    pub star_data_floats: usize,
    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_bodies: usize,
        max_star_points: usize,
        max_lights: usize,
        max_events: usize,
    ) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let star_data_floats = max_star_points * STAR_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let star_data_offset = body_data_offset + body_data_floats;
        let light_data_offset = star_data_offset + star_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_star_points,
            max_lights,
            max_events,
            body_data_floats,
            star_data_floats,
            light_data_floats,
            event_data_floats,
            body_data_offset,
            star_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SceneConfig.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(
            config.max_bodies,
            config.max_star_points,
            config.max_lights,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&SceneConfig::default());

        assert_eq!(layout.max_bodies, 64);
        assert_eq!(layout.max_star_points, 1024);
        assert_eq!(layout.max_lights, 8);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.body_data_floats, 64 * 8);
        assert_eq!(layout.star_data_floats, 1024 * 3);
        assert_eq!(layout.light_data_floats, 8 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(8, 500, 4, 8);

        assert_eq!(layout.body_data_floats, 8 * 8);
        assert_eq!(layout.star_data_floats, 500 * 3);
        assert_eq!(layout.light_data_floats, 4 * 8);
        assert_eq!(layout.event_data_floats, 8 * 4);

        let expected_total = HEADER_FLOATS + 8 * 8 + 500 * 3 + 4 * 8 + 8 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 200, 10, 20);

        assert_eq!(layout.body_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.star_data_offset,
            layout.body_data_offset + layout.body_data_floats
        );
        assert_eq!(
            layout.light_data_offset,
            layout.star_data_offset + layout.star_data_floats
        );
        assert_eq!(
            layout.event_data_offset,
            layout.light_data_offset + layout.light_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
    }
}
