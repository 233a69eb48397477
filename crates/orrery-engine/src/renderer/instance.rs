use bytemuck::{Pod, Zeroable};

/// Per-body render data written to SharedArrayBuffer for the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
///
/// `texture_slot` is the resolved slot index of the body's texture set,
/// or -1.0 when the set is not (yet) known — the host renders the sphere
/// untextured in that case rather than dropping it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Accumulated rotation about +Y, in radians.
    pub rotation: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Resolved texture set slot, or -1.0 for the placeholder.
    pub texture_slot: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Padding to an 8-float stride.
    pub _pad: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all body instances for one frame.
pub struct BodyBuffer {
    pub instances: Vec<BodyInstance>,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    /// Create a buffer with a specific instance capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 32);
        assert_eq!(BodyInstance::FLOATS, 8);
    }

    #[test]
    fn body_buffer_push_and_count() {
        let mut buf = BodyBuffer::new();
        buf.push(BodyInstance::default());
        buf.push(BodyInstance::default());
        assert_eq!(buf.instance_count(), 2);
    }

    #[test]
    fn clear_resets_count() {
        let mut buf = BodyBuffer::new();
        buf.push(BodyInstance::default());
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
