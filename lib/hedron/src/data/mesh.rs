mod attribute;
mod channel;

pub use attribute::*;
pub use channel::*;

/// A flattened, renderer-ready triangle list.
///
/// # Characteristics
///
/// * Every vertex channel holds exactly [`vertex_count`](MeshData::vertex_count) elements
/// * `indices` holds [`index_count`](MeshData::index_count) scalars, three per triangle
/// * Channels are sized once, at construction; contents are written through [`Channel::map`]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub position: Channel<f32>,
    pub uv0: Channel<f32>,
    pub normal: Channel<f32>,
    pub color0: Channel<f32>,
    pub light0: Channel<f32>,
    pub indices: Channel<u32>,
}

impl MeshData {
    /// The vertex channels carried by every [MeshData], in storage order.
    pub const USAGES: [AttributeUsage; 5] = [
        AttributeUsage::Position,
        AttributeUsage::Texcoord(0),
        AttributeUsage::Normal,
        AttributeUsage::Color(0),
        AttributeUsage::Light(0),
    ];

    /// Construct zero-filled mesh data with room for exactly `vertex_count` vertices and
    /// `index_count` indices.
    pub fn new(vertex_count: usize, index_count: usize) -> Self {
        let channel = |usage: AttributeUsage| Channel::new(usage.attr_type(), vertex_count);
        Self {
            position: channel(AttributeUsage::Position),
            uv0: channel(AttributeUsage::Texcoord(0)),
            normal: channel(AttributeUsage::Normal),
            color0: channel(AttributeUsage::Color(0)),
            light0: channel(AttributeUsage::Light(0)),
            indices: Channel::new(AttributeType::Scalar, index_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.position.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of whole triangles described by the index channel.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }

    pub fn attribute(&self, usage: AttributeUsage) -> Option<&Channel<f32>> {
        match usage {
            AttributeUsage::Position => Some(&self.position),
            AttributeUsage::Normal => Some(&self.normal),
            AttributeUsage::Texcoord(0) => Some(&self.uv0),
            AttributeUsage::Color(0) => Some(&self.color0),
            AttributeUsage::Light(0) => Some(&self.light0),
            _ => None,
        }
    }

    pub fn attribute_mut(&mut self, usage: AttributeUsage) -> Option<&mut Channel<f32>> {
        match usage {
            AttributeUsage::Position => Some(&mut self.position),
            AttributeUsage::Normal => Some(&mut self.normal),
            AttributeUsage::Texcoord(0) => Some(&mut self.uv0),
            AttributeUsage::Color(0) => Some(&mut self.color0),
            AttributeUsage::Light(0) => Some(&mut self.light0),
            _ => None,
        }
    }

    /// Iterate over every vertex channel along with its usage.
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeUsage, &Channel<f32>)> + '_ {
        Self::USAGES
            .into_iter()
            .filter_map(move |usage| self.attribute(usage).map(|ch| (usage, ch)))
    }

    /// Iterate over each triangle's three indices.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .as_slice()
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}
