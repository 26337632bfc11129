/// How the optional polygon channels (normal, light) are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Every channel is written for every vertex.
    ///
    /// When a [VertexStyle](crate::VertexStyle) disables normals or lighting, the default value
    /// for that channel is written instead, so every channel stays in step with the vertex count.
    #[default]
    Fixed,
    /// Polygon vertices skip the normal/light channel while the style disables it.
    ///
    /// Mesh parts still write both. Toggling a flag between appends leaves that channel shorter
    /// than `stride * vertex_count`, at which point its elements no longer line up with their
    /// vertices; keep the flags constant for the lifetime of a tessellator when using this.
    Compact,
}

/// Construction-time settings for a [Tessellator](crate::Tessellator).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TessellatorConfig {
    /// Layout of the optional normal and light channels.
    pub layout: ChannelLayout,
    /// Vertices to reserve room for up front.
    pub vertex_capacity: usize,
    /// Indices to reserve room for up front.
    pub index_capacity: usize,
}

impl TessellatorConfig {
    /// These settings with `layout` replaced.
    #[inline]
    pub fn with_layout(self, layout: ChannelLayout) -> Self {
        Self { layout, ..self }
    }

    /// These settings with the up-front reservation replaced.
    #[inline]
    pub fn with_capacity(self, vertices: usize, indices: usize) -> Self {
        Self {
            vertex_capacity: vertices,
            index_capacity: indices,
            ..self
        }
    }
}
