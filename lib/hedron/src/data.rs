//! # See Also
//!
//! * [glTF 2.0 mesh attributes](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#meshes-overview),
//!   from which the attribute type/component vocabulary is taken.

mod mesh;

pub use mesh::*;
