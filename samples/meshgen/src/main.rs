use clap::Parser;
use g3d::{shapes, GeometryAttributes};
use nalgebra::Matrix4;

mod cli;

use cli::{Cli, Shape};

/// Log the shape of `mesh` after `step`.
fn report(step: &str, mesh: &GeometryAttributes) {
    tracing::info!(
        step,
        vertices = mesh.num_vertices(),
        faces = mesh.num_faces(),
        corners = mesh.num_corners(),
        corners_per_face = mesh.num_corners_per_face(),
        subgeometries = mesh.num_subgeometries(),
        attributes = mesh.len()
    );
    for attr in mesh {
        tracing::debug!(step, name = %attr.name(), elements = attr.element_count());
    }
}

fn build(cli: &Cli) -> Result<GeometryAttributes, g3d::Error> {
    let mut mesh = match cli.shape {
        Shape::Quad => shapes::unit_quad(),
        Shape::Cube => shapes::unit_cube(),
        Shape::Grid => shapes::grid(cli.grid.0, cli.grid.1)?,
    };
    report("build", &mesh);

    if let Some((from, count)) = cli.select {
        let faces: Vec<usize> = (from..from.saturating_add(count)).collect();
        match mesh.select_faces(&faces)? {
            Some(selected) => mesh = selected,
            None => tracing::warn!("empty selection; keeping every face"),
        }
        report("select", &mesh);
    }
    if cli.triangulate {
        mesh = mesh.triangulate_quad_mesh()?;
        report("triangulate", &mesh);
    }
    if cli.flip {
        mesh = mesh.flip_winding_order()?;
        report("flip", &mesh);
    }
    if cli.double_sided {
        mesh = mesh.double_sided()?;
        report("double-sided", &mesh);
    }

    let mut matrix = Matrix4::new_nonuniform_scaling(&cli.scale);
    if let Some(offset) = &cli.translate {
        matrix.append_translation_mut(offset);
    }
    if matrix != Matrix4::identity() {
        mesh = mesh.transform(&matrix);
        report("transform", &mesh);
    }
    if let Some(rgba) = cli.color {
        mesh = mesh.color(rgba);
        report("color", &mesh);
    }
    if cli.face_normals {
        mesh = mesh.compute_face_normals()?;
        report("face-normals", &mesh);
    }

    mesh.validate()?;
    Ok(mesh)
}

fn main() -> Result<(), g3d::Error> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);
    tracing::debug!(?cli);

    let mesh = build(&cli)?;
    if let Ok(triangles) = mesh.triangles() {
        let area: f32 = triangles.iter().map(|t| t.area()).sum();
        tracing::info!(area, "surface");
    } else if let Ok(quads) = mesh.quads() {
        let area: f32 = quads.iter().map(|q| q.area()).sum();
        tracing::info!(area, "surface");
    }
    Ok(())
}
