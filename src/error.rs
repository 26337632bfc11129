/// Errors related to [Tessellators](crate::Tessellator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
    #[error("appending {added} vertices after vertex {next_index} would overflow the u32 index space")]
    IndexOverflow { next_index: u32, added: usize },
}

/// Reasons an append operation (or mesh fragment constructor) rejected its input.
///
/// Whenever one of these is returned, nothing has been written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("polygon has {vertices} vertices but {tex_coords} texture coordinates")]
    MismatchedTexCoords { vertices: usize, tex_coords: usize },
    #[error("polygon needs at least 3 vertices; found {0}")]
    DegeneratePolygon(usize),
    #[error("mesh part index #{position} is {index}, but the part only has {size} vertices")]
    PartIndexOutOfRange {
        position: usize,
        index: u32,
        size: usize,
    },
    #[error("index count {0} is not a whole number of triangles")]
    IncompleteTriangle(usize),
    #[error("mesh part has {vertices} vertices, {normals} normals, and {tex_coords} texture coordinates")]
    MismatchedPartChannels {
        vertices: usize,
        normals: usize,
        tex_coords: usize,
    },
}
