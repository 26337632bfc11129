#![allow(dead_code)]

use nalgebra::point;
use tessellator::{
    hedron::{Normal, Position, Texcoord},
    BlockMeshPart,
};

/// A regular `n`-gon on the XZ plane, with matching texture coordinates.
pub fn ngon(n: usize) -> (Vec<Position>, Vec<Texcoord>) {
    (0..n)
        .map(|i| {
            let theta = std::f32::consts::TAU * i as f32 / n as f32;
            let (s, c) = theta.sin_cos();
            (point![c, 0.0, s], point![0.5 + c / 2.0, 0.5 + s / 2.0])
        })
        .unzip()
}

/// A single triangle facing +Z.
pub fn triangle_part() -> BlockMeshPart {
    BlockMeshPart::new(
        vec![
            point![0.0, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![0.0, 1.0, 0.0],
        ],
        vec![Normal::z(); 3],
        vec![point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]],
        vec![0, 1, 2],
    )
    .unwrap()
}

/// The -Y face of a unit cube.
pub fn bottom_face() -> BlockMeshPart {
    BlockMeshPart::quad(
        [
            point![0.0, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![1.0, 0.0, 1.0],
            point![0.0, 0.0, 1.0],
        ],
        -Normal::y(),
        [
            point![0.0, 0.0],
            point![1.0, 0.0],
            point![1.0, 1.0],
            point![0.0, 1.0],
        ],
    )
}
