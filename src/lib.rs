//! Procedural mesh building.
//!
//! A [Tessellator] accumulates vertices (position, texture coordinate, normal, color, light) and
//! triangle indices from convex polygons and pre-built [mesh parts](MeshPart), then flattens them
//! into [MeshData] for a renderer.
//!
//! ```
//! use nalgebra::point;
//! use tessellator::Tessellator;
//!
//! let mut tess = Tessellator::new();
//! tess.set_color(point![1.0, 0.0, 0.0, 1.0]);
//! tess.add_poly(
//!     &[
//!         point![0.0, 0.0, 0.0],
//!         point![1.0, 0.0, 0.0],
//!         point![1.0, 0.0, 1.0],
//!         point![0.0, 0.0, 1.0],
//!     ],
//!     &[point![0.0, 0.0], point![1.0, 0.0], point![1.0, 1.0], point![0.0, 1.0]],
//! )?;
//!
//! let data = tess.generate_mesh_data();
//! assert_eq!(data.vertex_count(), 4);
//! assert_eq!(data.indices.as_slice(), &[0, 1, 2, 0, 2, 3]);
//! # Ok::<(), tessellator::Error>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod asset;
mod config;
pub mod error;
pub mod part;
pub mod style;
mod tessellator;

pub use asset::*;
pub use config::*;
pub use error::{ArgumentError, Error};
pub use part::{BlockMeshPart, MeshPart};
pub use style::VertexStyle;
pub use self::tessellator::*;

// reexport so callers don't need a direct dependency for the output types
pub use hedron;
pub use hedron::MeshData;
