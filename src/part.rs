//! Pre-built, indexed geometry which can be merged into a [Tessellator](crate::Tessellator).

use hedron::{Normal, Position, Texcoord};

use crate::error::ArgumentError;

/// An immutable, already-indexed block of geometry; e.g. one face of a block shape.
///
/// Indices returned by [`index`](MeshPart::index) must be `< size()`, and are read three at a
/// time as triangles.
pub trait MeshPart {
    /// Number of vertices.
    fn size(&self) -> usize;
    /// Number of indices.
    fn indices_size(&self) -> usize;
    fn vertex(&self, i: usize) -> Position;
    fn normal(&self, i: usize) -> Normal;
    fn tex_coord(&self, i: usize) -> Texcoord;
    fn index(&self, i: usize) -> u32;
}

impl<T: MeshPart + ?Sized> MeshPart for &T {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
    #[inline]
    fn indices_size(&self) -> usize {
        (**self).indices_size()
    }
    #[inline]
    fn vertex(&self, i: usize) -> Position {
        (**self).vertex(i)
    }
    #[inline]
    fn normal(&self, i: usize) -> Normal {
        (**self).normal(i)
    }
    #[inline]
    fn tex_coord(&self, i: usize) -> Texcoord {
        (**self).tex_coord(i)
    }
    #[inline]
    fn index(&self, i: usize) -> u32 {
        (**self).index(i)
    }
}

/// Check that every index of `part` refers to one of its vertices.
pub(crate) fn validate_indices(part: &impl MeshPart) -> Result<(), ArgumentError> {
    let size = part.size();
    (0..part.indices_size()).try_for_each(|position| {
        let index = part.index(position);
        if (index as usize) < size {
            Ok(())
        } else {
            Err(ArgumentError::PartIndexOutOfRange {
                position,
                index,
                size,
            })
        }
    })
}

/// A [MeshPart] which owns its vertex data.
///
/// # Invariants
///
/// * `vertices.len() == normals.len() == tex_coords.len()`
/// * `indices.len() % 3 == 0`
/// * every index is `< vertices.len()`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMeshPart {
    vertices: Vec<Position>,
    normals: Vec<Normal>,
    tex_coords: Vec<Texcoord>,
    indices: Vec<u32>,
}

impl BlockMeshPart {
    pub fn new(
        vertices: Vec<Position>,
        normals: Vec<Normal>,
        tex_coords: Vec<Texcoord>,
        indices: Vec<u32>,
    ) -> Result<Self, ArgumentError> {
        if vertices.len() != normals.len() || vertices.len() != tex_coords.len() {
            return Err(ArgumentError::MismatchedPartChannels {
                vertices: vertices.len(),
                normals: normals.len(),
                tex_coords: tex_coords.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(ArgumentError::IncompleteTriangle(indices.len()));
        }
        let res = Self {
            vertices,
            normals,
            tex_coords,
            indices,
        };
        validate_indices(&res)?;
        Ok(res)
    }

    /// A flat four-cornered face, triangulated as `(0, 1, 2), (0, 2, 3)`.
    pub fn quad(corners: [Position; 4], normal: Normal, tex_coords: [Texcoord; 4]) -> Self {
        Self {
            vertices: corners.to_vec(),
            normals: vec![normal; 4],
            tex_coords: tex_coords.to_vec(),
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    #[inline]
    pub fn tex_coords(&self) -> &[Texcoord] {
        &self.tex_coords
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

impl MeshPart for BlockMeshPart {
    #[inline]
    fn size(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn indices_size(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    fn vertex(&self, i: usize) -> Position {
        self.vertices[i]
    }

    #[inline]
    fn normal(&self, i: usize) -> Normal {
        self.normals[i]
    }

    #[inline]
    fn tex_coord(&self, i: usize) -> Texcoord {
        self.tex_coords[i]
    }

    #[inline]
    fn index(&self, i: usize) -> u32 {
        self.indices[i]
    }
}
