//! Polygon appends: fan triangulation, style application, and input rejection.

mod common;

use common::ngon;
use nalgebra::{point, vector};
use tessellator::{
    ArgumentError, ChannelLayout, Error, Tessellator, TessellatorConfig, VertexStyle,
};

#[test]
fn quad_fan() {
    let mut tess = Tessellator::new();
    let (verts, uvs) = ngon(4);
    tess.add_poly(&verts, &uvs).unwrap();
    assert_eq!(tess.indices(), &[0, 1, 2, 0, 2, 3]);
    assert_eq!(tess.next_index(), 4);
}

#[test]
fn fan_is_offset_by_previous_appends() {
    let mut tess = Tessellator::new();
    let (tri, tri_uv) = ngon(3);
    let (pent, pent_uv) = ngon(5);
    tess.add_poly(&tri, &tri_uv).unwrap();
    tess.add_poly(&pent, &pent_uv).unwrap();
    assert_eq!(
        tess.indices(),
        &[0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7]
    );
    assert_eq!(tess.next_index(), 8);
    assert_eq!(tess.vertex_count(), 8);
}

#[test]
fn vertex_data_in_input_order() {
    let mut tess = Tessellator::new();
    let (verts, uvs) = ngon(3);
    tess.add_poly(&verts, &uvs).unwrap();
    let expected_pos: Vec<f32> = verts.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
    let expected_uv: Vec<f32> = uvs.iter().flat_map(|t| [t.x, t.y]).collect();
    assert_eq!(tess.positions(), expected_pos.as_slice());
    assert_eq!(tess.uv0(), expected_uv.as_slice());
    // defaults
    assert_eq!(tess.color0(), &[1.0; 12]);
    assert_eq!(tess.normals(), &[0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(tess.light0(), &[1.0; 9]);
}

#[test]
fn rejects_mismatched_tex_coords() {
    let mut tess = Tessellator::new();
    let (verts, uvs) = ngon(4);
    let err = tess.add_poly(&verts, &uvs[..3]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidArgument(ArgumentError::MismatchedTexCoords {
            vertices: 4,
            tex_coords: 3
        })
    );
    assert!(tess.positions().is_empty());
    assert!(tess.uv0().is_empty());
    assert!(tess.normals().is_empty());
    assert!(tess.color0().is_empty());
    assert!(tess.light0().is_empty());
    assert!(tess.indices().is_empty());
    assert_eq!(tess.next_index(), 0);
}

#[test]
fn rejects_degenerate_polygon() {
    let mut tess = Tessellator::new();
    let (verts, uvs) = ngon(3);
    tess.add_poly(&verts, &uvs).unwrap();
    let before = tess.clone();

    let err = tess.add_poly(&verts[..2], &uvs[..2]).unwrap_err();
    assert_eq!(err, Error::InvalidArgument(ArgumentError::DegeneratePolygon(2)));

    assert_eq!(tess.positions(), before.positions());
    assert_eq!(tess.uv0(), before.uv0());
    assert_eq!(tess.normals(), before.normals());
    assert_eq!(tess.color0(), before.color0());
    assert_eq!(tess.light0(), before.light0());
    assert_eq!(tess.indices(), before.indices());
    assert_eq!(tess.next_index(), 3);
}

#[test]
fn color_change_only_affects_later_vertices() {
    let mut tess = Tessellator::new();
    let (verts, uvs) = ngon(3);
    tess.add_poly(&verts, &uvs).unwrap();
    tess.set_color(point![1.0, 0.0, 0.0, 0.5]);
    tess.add_poly(&verts, &uvs).unwrap();

    let (first, second) = tess.color0().split_at(12);
    assert!(first.iter().all(|&c| c == 1.0));
    for rgba in second.chunks_exact(4) {
        assert_eq!(rgba, &[1.0, 0.0, 0.0, 0.5]);
    }
}

#[test]
fn explicit_style_ignores_current_style() {
    let mut tess = Tessellator::new();
    tess.set_color(point![0.0, 0.0, 0.0, 1.0]);
    let style = VertexStyle::DEFAULT
        .with_normal(vector![1.0, 0.0, 0.0])
        .with_lighting(point![0.25, 0.5, 0.75]);
    let (verts, uvs) = ngon(3);
    tess.add_poly_with(&style, &verts, &uvs).unwrap();

    assert_eq!(&tess.color0()[..4], &[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(&tess.normals()[..3], &[1.0, 0.0, 0.0]);
    assert_eq!(&tess.light0()[..3], &[0.25, 0.5, 0.75]);
    // the held style is untouched
    assert_eq!(tess.style().color, point![0.0, 0.0, 0.0, 1.0]);

    // installing it makes it the one later appends use
    tess.set_style(style);
    assert_eq!(tess.style(), &style);
    tess.add_poly(&verts, &uvs).unwrap();
    assert_eq!(&tess.color0()[12..16], &[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(&tess.normals()[9..12], &[1.0, 0.0, 0.0]);
    assert_eq!(&tess.light0()[9..12], &[0.25, 0.5, 0.75]);
}

#[test]
fn reset_params_keeps_flags() {
    let mut tess = Tessellator::new();
    tess.set_use_normals(false);
    tess.set_color(point![0.0, 0.0, 0.0, 0.0]);
    tess.set_normal(vector![0.0, 0.0, 1.0]);
    tess.set_lighting(point![0.0, 0.0, 0.0]);
    tess.reset_params();

    let style = tess.style();
    assert_eq!(style.color, VertexStyle::DEFAULT_COLOR);
    assert_eq!(style.normal, VertexStyle::DEFAULT_NORMAL);
    assert_eq!(style.lighting, VertexStyle::DEFAULT_LIGHTING);
    assert!(!style.use_normals);
    assert!(style.use_lighting);
}

#[test]
fn fixed_layout_writes_defaults_for_disabled_channels() {
    let mut tess = Tessellator::new();
    tess.set_normal(vector![0.0, 0.0, -1.0]);
    tess.set_lighting(point![0.5, 0.5, 0.5]);
    let (verts, uvs) = ngon(3);
    tess.add_poly(&verts, &uvs).unwrap();
    tess.set_use_normals(false);
    tess.set_use_lighting(false);
    tess.add_poly(&verts, &uvs).unwrap();

    assert_eq!(tess.normals().len(), 3 * 6);
    assert_eq!(tess.light0().len(), 3 * 6);
    assert_eq!(&tess.normals()[..3], &[0.0, 0.0, -1.0]);
    assert_eq!(&tess.normals()[9..12], &[0.0, 1.0, 0.0]);
    assert_eq!(&tess.light0()[..3], &[0.5, 0.5, 0.5]);
    assert_eq!(&tess.light0()[9..12], &[1.0, 1.0, 1.0]);
}

#[test]
fn compact_layout_skips_disabled_channels() {
    let mut tess =
        Tessellator::with_config(TessellatorConfig::default().with_layout(ChannelLayout::Compact));
    tess.set_use_normals(false);
    tess.set_use_lighting(false);
    let (verts, uvs) = ngon(4);
    tess.add_poly(&verts, &uvs).unwrap();

    assert_eq!(tess.positions().len(), 12);
    assert_eq!(tess.uv0().len(), 8);
    assert_eq!(tess.color0().len(), 16);
    assert!(tess.normals().is_empty());
    assert!(tess.light0().is_empty());

    // the snapshot is still sized to the vertex count; the missing channels stay zeroed
    let data = tess.generate_mesh_data();
    assert_eq!(data.normal.len(), 4);
    assert!(data.normal.as_slice().iter().all(|&c| c == 0.0));
    assert!(data.light0.as_slice().iter().all(|&c| c == 0.0));
}

#[test]
fn compact_layout_short_channel_is_zero_padded() {
    let mut tess =
        Tessellator::with_config(TessellatorConfig::default().with_layout(ChannelLayout::Compact));
    let (verts, uvs) = ngon(3);
    tess.set_use_normals(false);
    tess.add_poly(&verts, &uvs).unwrap();
    tess.set_use_normals(true);
    tess.add_poly(&verts, &uvs).unwrap();

    assert_eq!(tess.vertex_count(), 6);
    assert_eq!(tess.normals().len(), 9);

    // the normals written are copied from the front; the vertices they don't cover stay zeroed
    let data = tess.generate_mesh_data();
    assert_eq!(data.normal.len(), 6);
    let (written, padding) = data.normal.as_slice().split_at(9);
    assert_eq!(written, &[0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(padding, &[0.0; 9]);
}

#[test]
fn config_is_stored() {
    let tess = Tessellator::with_config(TessellatorConfig::default().with_capacity(64, 96));
    assert_eq!(tess.config().vertex_capacity, 64);
    assert_eq!(tess.config().index_capacity, 96);
    assert_eq!(tess.config().layout, ChannelLayout::Fixed);
    assert_eq!(tess.vertex_count(), 0);
}
