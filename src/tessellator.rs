use hedron::{Attribute, Channel, MeshData, Normal, Position, Rgb, Rgba, Texcoord};

use crate::{
    asset::MeshFactory,
    config::{ChannelLayout, TessellatorConfig},
    error::{ArgumentError, Error},
    part::{validate_indices, MeshPart},
    style::VertexStyle,
};

/// Components per position.
const POSITION_STRIDE: usize = 3;
const UV_STRIDE: usize = 2;
const NORMAL_STRIDE: usize = 3;
const COLOR_STRIDE: usize = 4;
const LIGHT_STRIDE: usize = 3;

#[inline]
fn push<A: Attribute<Component = f32>>(buf: &mut Vec<f32>, value: &A) {
    buf.extend_from_slice(value.components());
}

/// Accumulates vertices and triangles, then flattens them into [MeshData].
///
/// Each vertex is written to five parallel channels: position, first texture coordinate set,
/// normal, first color set, and first light set. Values which a caller doesn't supply per vertex
/// are taken from a [VertexStyle]; either the tessellator's current style (as changed through
/// `set_*`), or one passed explicitly to a `*_with` append.
///
/// Indices emitted by each append are offset by [`next_index`](Tessellator::next_index), so
/// fragments appended by separate calls share one index space.
///
/// Not thread-safe; every append takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Tessellator {
    config: TessellatorConfig,
    style: VertexStyle,
    next_index: u32,
    positions: Vec<f32>,
    uv0: Vec<f32>,
    normals: Vec<f32>,
    color0: Vec<f32>,
    light0: Vec<f32>,
    indices: Vec<u32>,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tessellator {
    /// Construct an empty tessellator with the default [TessellatorConfig].
    pub fn new() -> Self {
        Self::with_config(TessellatorConfig::default())
    }

    /// Construct an empty tessellator, reserving the capacity `config` asks for.
    pub fn with_config(config: TessellatorConfig) -> Self {
        let mut res = Self {
            config,
            style: VertexStyle::DEFAULT,
            next_index: 0,
            positions: Vec::new(),
            uv0: Vec::new(),
            normals: Vec::new(),
            color0: Vec::new(),
            light0: Vec::new(),
            indices: Vec::new(),
        };
        res.reserve(config.vertex_capacity, config.index_capacity);
        res
    }

    /// The settings this tessellator was built with.
    #[inline]
    pub fn config(&self) -> &TessellatorConfig {
        &self.config
    }

    /// Reserve room for at least `vertices` more vertices and `indices` more indices.
    pub fn reserve(&mut self, vertices: usize, indices: usize) {
        self.positions.reserve(vertices * POSITION_STRIDE);
        self.uv0.reserve(vertices * UV_STRIDE);
        self.normals.reserve(vertices * NORMAL_STRIDE);
        self.color0.reserve(vertices * COLOR_STRIDE);
        self.light0.reserve(vertices * LIGHT_STRIDE);
        self.indices.reserve(indices);
    }

    // --- style ---

    /// The style applied by [`add_poly`](Tessellator::add_poly) and
    /// [`add_mesh_part`](Tessellator::add_mesh_part).
    #[inline]
    pub fn style(&self) -> &VertexStyle {
        &self.style
    }

    /// Replace the whole current style, enable flags included.
    #[inline]
    pub fn set_style(&mut self, style: VertexStyle) {
        self.style = style;
    }

    /// Color for vertices appended after this call.
    #[inline]
    pub fn set_color(&mut self, color: Rgba) {
        self.style = self.style.with_color(color);
    }

    /// Normal for polygon vertices appended after this call.
    #[inline]
    pub fn set_normal(&mut self, normal: Normal) {
        self.style = self.style.with_normal(normal);
    }

    /// Light value for vertices appended after this call.
    #[inline]
    pub fn set_lighting(&mut self, lighting: Rgb) {
        self.style = self.style.with_lighting(lighting);
    }

    /// Whether later polygon vertices carry the current normal.
    #[inline]
    pub fn set_use_normals(&mut self, enable: bool) {
        self.style = self.style.with_normals_enabled(enable);
    }

    /// Whether later polygon vertices carry the current light value.
    #[inline]
    pub fn set_use_lighting(&mut self, enable: bool) {
        self.style = self.style.with_lighting_enabled(enable);
    }

    /// Restore color, normal, and lighting to their defaults. The enable flags are kept.
    #[inline]
    pub fn reset_params(&mut self) {
        self.style = self.style.reset();
    }

    // --- accumulated data ---

    /// The number of vertices appended so far; the offset applied to the next append's indices.
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Vertices appended so far, counted from the position channel.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_STRIDE
    }

    /// Flat channel data accumulated so far, three components per vertex.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn uv0(&self) -> &[f32] {
        &self.uv0
    }

    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    #[inline]
    pub fn color0(&self) -> &[f32] {
        &self.color0
    }

    #[inline]
    pub fn light0(&self) -> &[f32] {
        &self.light0
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    // --- appending ---

    /// The value of `next_index` after appending `added` vertices.
    fn advance(&self, added: usize) -> Result<u32, Error> {
        u32::try_from(added)
            .ok()
            .and_then(|added| self.next_index.checked_add(added))
            .ok_or(Error::IndexOverflow {
                next_index: self.next_index,
                added,
            })
    }

    /// Append a convex, planar polygon using the current style.
    ///
    /// See [`add_poly_with`](Tessellator::add_poly_with).
    pub fn add_poly(&mut self, vertices: &[Position], tex_coords: &[Texcoord]) -> Result<(), Error> {
        let style = self.style;
        self.add_poly_with(&style, vertices, tex_coords)
    }

    /// Append a convex, planar polygon, fan-triangulated from its first vertex.
    ///
    /// Vertex `i` gets `vertices[i]` and `tex_coords[i]`, plus color, normal, and lighting from
    /// `style`. Triangles are `(0, i + 1, i + 2)` for `i` in `0..vertices.len() - 2`, relative to
    /// the current [`next_index`](Tessellator::next_index), keeping the input winding.
    ///
    /// Convexity isn't checked; a concave polygon is triangulated the same way.
    ///
    /// # Errors
    ///
    /// * [ArgumentError::MismatchedTexCoords] if `vertices.len() != tex_coords.len()`
    /// * [ArgumentError::DegeneratePolygon] if `vertices.len() < 3`
    /// * [Error::IndexOverflow] if the new vertices wouldn't be addressable by a `u32`
    pub fn add_poly_with(
        &mut self,
        style: &VertexStyle,
        vertices: &[Position],
        tex_coords: &[Texcoord],
    ) -> Result<(), Error> {
        if vertices.len() != tex_coords.len() {
            return Err(ArgumentError::MismatchedTexCoords {
                vertices: vertices.len(),
                tex_coords: tex_coords.len(),
            }
            .into());
        }
        if vertices.len() < 3 {
            return Err(ArgumentError::DegeneratePolygon(vertices.len()).into());
        }
        let next = self.advance(vertices.len())?;
        let base = self.next_index;

        let (normal, lighting) = match self.config.layout {
            ChannelLayout::Fixed => (
                Some(if style.use_normals {
                    style.normal
                } else {
                    VertexStyle::DEFAULT_NORMAL
                }),
                Some(if style.use_lighting {
                    style.lighting
                } else {
                    VertexStyle::DEFAULT_LIGHTING
                }),
            ),
            ChannelLayout::Compact => (
                style.use_normals.then_some(style.normal),
                style.use_lighting.then_some(style.lighting),
            ),
        };

        for (vertex, uv) in vertices.iter().zip(tex_coords) {
            push(&mut self.positions, vertex);
            push(&mut self.color0, &style.color);
            if let Some(normal) = &normal {
                push(&mut self.normals, normal);
            }
            push(&mut self.uv0, uv);
            if let Some(lighting) = &lighting {
                push(&mut self.light0, lighting);
            }
        }

        // standard fan
        let last = next - base - 1;
        self.indices
            .extend((1..last).flat_map(|i| [base, base + i, base + i + 1]));

        tracing::trace!(
            base,
            vertices = vertices.len(),
            triangles = vertices.len() - 2,
            "appended polygon"
        );
        self.next_index = next;
        Ok(())
    }

    /// Append a mesh part using the current style.
    ///
    /// See [`add_mesh_part_with`](Tessellator::add_mesh_part_with).
    pub fn add_mesh_part(&mut self, part: &impl MeshPart) -> Result<(), Error> {
        let style = self.style;
        self.append_part(&style, part, false)
    }

    /// Append a mesh part, visible from both sides, using the current style.
    ///
    /// See [`add_mesh_part_double_sided_with`](Tessellator::add_mesh_part_double_sided_with).
    pub fn add_mesh_part_double_sided(&mut self, part: &impl MeshPart) -> Result<(), Error> {
        let style = self.style;
        self.append_part(&style, part, true)
    }

    /// Append every vertex and index of `part`.
    ///
    /// Each vertex gets the part's own position, normal, and texture coordinate, plus color and
    /// lighting from `style`. Normal and lighting are written regardless of the style's enable
    /// flags. The part's indices are offset by the current [`next_index`](Tessellator::next_index)
    /// and otherwise kept as-is.
    ///
    /// # Errors
    ///
    /// * [ArgumentError::PartIndexOutOfRange] if any index of `part` is `>= part.size()`
    /// * [Error::IndexOverflow] if the new vertices wouldn't be addressable by a `u32`
    pub fn add_mesh_part_with(
        &mut self,
        style: &VertexStyle,
        part: &impl MeshPart,
    ) -> Result<(), Error> {
        self.append_part(style, part, false)
    }

    /// As [`add_mesh_part_with`](Tessellator::add_mesh_part_with), then append each triangle
    /// `(a, b, c)` of `part` a second time as `(a, c, b)`.
    ///
    /// The reversed triangles reuse the vertices just appended; only indices are duplicated.
    ///
    /// # Errors
    ///
    /// As [`add_mesh_part_with`](Tessellator::add_mesh_part_with), plus
    /// [ArgumentError::IncompleteTriangle] if `part.indices_size()` isn't a multiple of 3.
    pub fn add_mesh_part_double_sided_with(
        &mut self,
        style: &VertexStyle,
        part: &impl MeshPart,
    ) -> Result<(), Error> {
        self.append_part(style, part, true)
    }

    fn append_part(
        &mut self,
        style: &VertexStyle,
        part: &impl MeshPart,
        double_sided: bool,
    ) -> Result<(), Error> {
        let index_count = part.indices_size();
        if double_sided && index_count % 3 != 0 {
            return Err(ArgumentError::IncompleteTriangle(index_count).into());
        }
        validate_indices(part)?;
        let next = self.advance(part.size())?;
        let base = self.next_index;

        for i in 0..part.size() {
            push(&mut self.positions, &part.vertex(i));
            push(&mut self.color0, &style.color);
            push(&mut self.normals, &part.normal(i));
            push(&mut self.uv0, &part.tex_coord(i));
            push(&mut self.light0, &style.lighting);
        }

        self.indices
            .extend((0..index_count).map(|i| base + part.index(i)));
        if double_sided {
            self.indices.extend((0..index_count).step_by(3).flat_map(|i| {
                [
                    base + part.index(i),
                    base + part.index(i + 2),
                    base + part.index(i + 1),
                ]
            }));
        }

        tracing::trace!(
            base,
            vertices = part.size(),
            indices = index_count,
            double_sided,
            "appended mesh part"
        );
        self.next_index = next;
        Ok(())
    }

    // --- output ---

    /// Copy everything accumulated so far into a new [MeshData].
    ///
    /// The tessellator is left untouched, so this may be called repeatedly as more geometry is
    /// appended.
    pub fn generate_mesh_data(&self) -> MeshData {
        let vertex_count = self.vertex_count();
        let mut data = MeshData::new(vertex_count, self.indices.len());
        copy_channel("position", &mut data.position, &self.positions);
        copy_channel("uv0", &mut data.uv0, &self.uv0);
        copy_channel("normal", &mut data.normal, &self.normals);
        copy_channel("color0", &mut data.color0, &self.color0);
        copy_channel("light0", &mut data.light0, &self.light0);
        data.indices.fill_from(&self.indices);
        tracing::debug!(
            vertex_count,
            index_count = self.indices.len(),
            "generated mesh data"
        );
        data
    }

    /// Generate a mesh registered under `id`.
    ///
    /// # Errors
    ///
    /// * [Error::PreconditionViolation] if `id` is `None`
    #[tracing::instrument(skip_all, fields(vertices = self.vertex_count(), indices = self.indices.len()))]
    pub fn generate_mesh<F: MeshFactory>(
        &self,
        factory: &mut F,
        id: Option<F::Id>,
    ) -> Result<F::Mesh, Error> {
        let id = id.ok_or(Error::PreconditionViolation(
            "a named mesh requires an identifier",
        ))?;
        Ok(factory.generate(Some(id), self.generate_mesh_data()))
    }

    /// Generate a mesh without an identifier.
    #[tracing::instrument(skip_all, fields(vertices = self.vertex_count(), indices = self.indices.len()))]
    pub fn generate_anonymous_mesh<F: MeshFactory>(&self, factory: &mut F) -> F::Mesh {
        factory.generate(None, self.generate_mesh_data())
    }
}

/// Copy `src` into `dest`, warning if a non-empty `src` doesn't cover every vertex exactly.
fn copy_channel(name: &'static str, dest: &mut Channel<f32>, src: &[f32]) {
    let copied = dest.fill_from(src);
    if !src.is_empty() && (copied != dest.len() || src.len() != copied * dest.width()) {
        tracing::warn!(
            channel = name,
            copied,
            vertex_count = dest.len(),
            components = src.len(),
            "vertex channel out of step with vertex count; unfilled vertices left zeroed"
        );
    }
}
