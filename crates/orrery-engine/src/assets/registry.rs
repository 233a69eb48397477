use crate::assets::manifest::TextureManifest;
use std::collections::HashMap;

/// Slot value written to the wire for a texture set that is not (yet) known.
/// The host renders the body untextured — a visible error, never a dropped body.
pub const PLACEHOLDER_SLOT: f32 = -1.0;

/// Index of a texture set in the host's texture array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

/// A texture set with its assigned slot and fully resolved map paths.
#[derive(Debug, Clone)]
pub struct ResolvedTextureSet {
    pub slot: TextureSlot,
    pub name: String,
    pub color: String,
    pub normal: Option<String>,
    pub bump: Option<String>,
}

/// Registry of named texture sets, built from a TextureManifest.
///
/// Slots are assigned in sorted name order, so a host that reads the same
/// manifest arrives at the same name → slot mapping without any handshake.
pub struct TextureRegistry {
    sets: HashMap<String, ResolvedTextureSet>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// Build a registry from a parsed TextureManifest.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut names: Vec<&String> = manifest.sets.keys().collect();
        names.sort();

        let mut sets = HashMap::with_capacity(names.len());
        for (i, name) in names.into_iter().enumerate() {
            // resolved() cannot miss: the name came from the manifest itself
            if let Some(desc) = manifest.resolved(name) {
                sets.insert(
                    name.clone(),
                    ResolvedTextureSet {
                        slot: TextureSlot(i as u32),
                        name: name.clone(),
                        color: desc.color,
                        normal: desc.normal,
                        bump: desc.bump,
                    },
                );
            }
        }
        Self { sets }
    }

    /// Look up a set's slot by name. Returns None if not found.
    pub fn slot(&self, name: &str) -> Option<TextureSlot> {
        self.sets.get(name).map(|s| s.slot)
    }

    /// Look up a set's slot as a wire value, warning and falling back to the
    /// placeholder when the set is unknown.
    pub fn require(&self, name: &str) -> f32 {
        match self.slot(name) {
            Some(slot) => slot.0 as f32,
            None => {
                log::warn!("texture set '{}' not in manifest, using placeholder", name);
                PLACEHOLDER_SLOT
            }
        }
    }

    /// Look up a set with its resolved map paths.
    pub fn get(&self, name: &str) -> Option<&ResolvedTextureSet> {
        self.sets.get(name)
    }

    /// Iterate over all sets (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedTextureSet> {
        self.sets.values()
    }

    /// Number of registered sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
