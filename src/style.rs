//! Per-vertex defaults applied by the append operations.

use hedron::{Normal, Rgb, Rgba};
use nalgebra::{point, vector};

/// The attribute values written for vertices which don't supply their own.
///
/// A style is a small `Copy` value; the `with_*` builders return an updated copy and leave `self`
/// untouched, so a style captured before an append describes exactly what that append wrote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexStyle {
    /// RGBA color written for every vertex.
    pub color: Rgba,
    /// Normal written for polygon vertices. Mesh parts bring their own normals.
    pub normal: Normal,
    /// RGB light value written for every vertex.
    pub lighting: Rgb,
    /// Whether polygon vertices carry [`normal`](VertexStyle::normal).
    pub use_normals: bool,
    /// Whether polygon vertices carry [`lighting`](VertexStyle::lighting).
    pub use_lighting: bool,
}

impl Default for VertexStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl VertexStyle {
    /// Opaque white.
    pub const DEFAULT_COLOR: Rgba = point![1.0, 1.0, 1.0, 1.0];
    /// +Y
    pub const DEFAULT_NORMAL: Normal = vector![0.0, 1.0, 0.0];
    /// Full white light.
    pub const DEFAULT_LIGHTING: Rgb = point![1.0, 1.0, 1.0];

    /// Opaque white, +Y normal, white light, normals & lighting enabled.
    pub const DEFAULT: Self = Self {
        color: Self::DEFAULT_COLOR,
        normal: Self::DEFAULT_NORMAL,
        lighting: Self::DEFAULT_LIGHTING,
        use_normals: true,
        use_lighting: true,
    };

    /// This style with `color` replaced.
    #[inline]
    pub fn with_color(self, color: Rgba) -> Self {
        Self { color, ..self }
    }

    /// This style with `normal` replaced.
    #[inline]
    pub fn with_normal(self, normal: Normal) -> Self {
        Self { normal, ..self }
    }

    /// This style with `lighting` replaced.
    #[inline]
    pub fn with_lighting(self, lighting: Rgb) -> Self {
        Self { lighting, ..self }
    }

    /// This style with polygon normals switched on or off.
    #[inline]
    pub fn with_normals_enabled(self, use_normals: bool) -> Self {
        Self {
            use_normals,
            ..self
        }
    }

    /// This style with polygon lighting switched on or off.
    #[inline]
    pub fn with_lighting_enabled(self, use_lighting: bool) -> Self {
        Self {
            use_lighting,
            ..self
        }
    }

    /// Restore color, normal, and lighting to their defaults, keeping the enable flags.
    #[inline]
    pub fn reset(self) -> Self {
        Self {
            use_normals: self.use_normals,
            use_lighting: self.use_lighting,
            ..Self::DEFAULT
        }
    }
}
