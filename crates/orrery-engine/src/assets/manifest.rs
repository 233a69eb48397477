use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Texture manifest describing all named texture sets for a scene.
/// Loaded from a JSON file at runtime.
///
/// The optional `base` prefix lets the same set table serve local paths
/// and remote URLs: a manifest with `"base": "https://cdn.example/assets"`
/// and one with no base but identical sets describe the same scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Optional URL or path prefix joined onto every map path.
    #[serde(default)]
    pub base: Option<String>,
    /// Named texture sets: name → {color, normal?, bump?}.
    pub sets: HashMap<String, TextureSetDescriptor>,
}

/// Describes the texture maps of one set. Only the color map is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureSetDescriptor {
    /// Relative path or URL of the color/diffuse map.
    pub color: String,
    /// Optional normal map.
    #[serde(default)]
    pub normal: Option<String>,
    /// Optional bump map.
    #[serde(default)]
    pub bump: Option<String>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a set by name with the base prefix joined onto each map path.
    pub fn resolved(&self, name: &str) -> Option<TextureSetDescriptor> {
        let set = self.sets.get(name)?;
        Some(TextureSetDescriptor {
            color: self.join(&set.color),
            normal: set.normal.as_deref().map(|p| self.join(p)),
            bump: set.bump.as_deref().map(|p| self.join(p)),
        })
    }

    fn join(&self, path: &str) -> String {
        match &self.base {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path),
            None => path.to_string(),
        }
    }
}
