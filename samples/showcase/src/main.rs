use clap::Parser;
use hedron::{Normal, Texcoord};
use nalgebra::point;
use tessellator::{BlockMeshPart, Tessellator, TessellatorConfig};

mod cli;

/// A regular polygon of `sides` sides on the XZ plane, wound counter-clockwise seen from +Y.
fn polygon(sides: u32, radius: f32) -> (Vec<hedron::Position>, Vec<Texcoord>) {
    (0..sides)
        .map(|i| {
            let theta = std::f32::consts::TAU * i as f32 / sides as f32;
            let (s, c) = theta.sin_cos();
            (
                point![c * radius, 0.0, -s * radius],
                point![0.5 + c / 2.0, 0.5 - s / 2.0],
            )
        })
        .unzip()
}

fn block_face() -> BlockMeshPart {
    BlockMeshPart::quad(
        [
            point![-0.5, 0.0, 1.5],
            point![0.5, 0.0, 1.5],
            point![0.5, 1.0, 1.5],
            point![-0.5, 1.0, 1.5],
        ],
        Normal::z(),
        [
            point![0.0, 1.0],
            point![1.0, 1.0],
            point![1.0, 0.0],
            point![0.0, 0.0],
        ],
    )
}

pub fn main() -> Result<(), tessellator::Error> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);
    tracing::debug!(?cli, "parsed arguments");

    let sides = cli.sides as usize;
    let mut tess = Tessellator::with_config(
        TessellatorConfig::default()
            .with_layout(cli.layout.into())
            .with_capacity(sides + 4, (sides - 2) * 3 + 12),
    );

    let (verts, uvs) = polygon(cli.sides, cli.radius);
    tess.add_poly(&verts, &uvs)?;

    tess.set_color(cli.color);
    let face = block_face();
    if cli.double_sided {
        tess.add_mesh_part_double_sided(&face)?;
    } else {
        tess.add_mesh_part(&face)?;
    }

    let data = tess.generate_mesh_data();
    tracing::info!(
        vertices = data.vertex_count(),
        triangles = data.triangle_count(),
        "tessellated showcase mesh"
    );

    println!("vertices:  {}", data.vertex_count());
    println!("indices:   {}", data.index_count());
    println!("triangles: {}", data.triangle_count());
    for (usage, channel) in data.attributes() {
        println!(
            "{:<12} {:?} x {} ({} components)",
            format!("{usage:?}"),
            channel.attr_type(),
            channel.len(),
            channel.as_slice().len()
        );
    }
    Ok(())
}
