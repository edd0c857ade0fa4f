//! Shading route for a generated surface
//!
//! The mesh always carries both vertex colors and texture coordinates; the
//! render mode tells the consumer which of the two to shade with. It changes
//! only through explicit transitions.

use serde::{Deserialize, Serialize};

/// How a surface's mesh is shaded downstream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Vertex color with lighting
    #[default]
    Lit,
    /// Texture lookup through the UV coordinates
    Textured,
}

impl RenderMode {
    /// Transition for switching the surface "on": shade with its texture
    pub const fn turned_on(self) -> Self {
        Self::Textured
    }

    /// Transition for switching the surface "off": fall back to lighting
    pub const fn turned_off(self) -> Self {
        Self::Lit
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Lit => Self::Textured,
            Self::Textured => Self::Lit,
        }
    }

    pub const fn is_textured(self) -> bool {
        matches!(self, Self::Textured)
    }

    /// Shader routing name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lit => "lighting",
            Self::Textured => "texture",
        }
    }
}
