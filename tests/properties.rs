//! Invariants that hold for arbitrary grids and selections.

use g3d::{shapes, GeometryAttributes};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// A grid with between 1 and 64 quads.
fn grid(cols: u8, rows: u8) -> GeometryAttributes {
    shapes::grid(usize::from(cols % 8) + 1, usize::from(rows % 8) + 1).unwrap()
}

#[quickcheck]
fn corners_fill_faces(cols: u8, rows: u8) -> bool {
    let g = grid(cols, rows);
    g.num_corners() == g.num_faces() * g.num_corners_per_face() && g.validate().is_ok()
}

#[quickcheck]
fn triangulation_doubles_faces(cols: u8, rows: u8) -> bool {
    let g = grid(cols, rows);
    let t = g.triangulate_quad_mesh().unwrap();
    t.num_faces() == 2 * g.num_faces()
        && t.num_corners() == 6 * g.num_faces()
        && t.num_vertices() == g.num_vertices()
        && t.validate().is_ok()
}

#[quickcheck]
fn merge_sums_counts(sizes: Vec<(u8, u8)>) -> TestResult {
    if sizes.len() < 2 {
        return TestResult::discard();
    }
    let parts: Vec<_> = sizes.iter().map(|&(c, r)| grid(c, r)).collect();
    let m = GeometryAttributes::merge(&parts).unwrap();
    TestResult::from_bool(
        m.num_vertices() == parts.iter().map(|p| p.num_vertices()).sum::<usize>()
            && m.num_corners() == parts.iter().map(|p| p.num_corners()).sum::<usize>()
            && m.num_subgeometries() == parts.len()
            && m.validate().is_ok(),
    )
}

#[quickcheck]
fn flip_is_involution(cols: u8, rows: u8) -> bool {
    let g = grid(cols, rows).compute_face_normals().unwrap();
    let flipped = g.flip_winding_order().unwrap();
    flipped != g && flipped.flip_winding_order().unwrap() == g
}

#[quickcheck]
fn selection_is_minimal(cols: u8, rows: u8, picks: Vec<u8>) -> TestResult {
    let g = grid(cols, rows);
    let faces: Vec<usize> = picks
        .iter()
        .map(|&p| usize::from(p) % g.num_faces())
        .collect();
    let Some(s) = g.select_faces(&faces).unwrap() else {
        return TestResult::from_bool(faces.is_empty());
    };
    let indices = s.indices().unwrap();
    let mut used: Vec<i32> = indices.clone();
    used.sort_unstable();
    used.dedup();
    TestResult::from_bool(
        s.num_faces() == faces.len()
            && used.len() == s.num_vertices()
            && indices
                .iter()
                .all(|&i| 0 <= i && (i as usize) < s.num_vertices())
            && s.validate().is_ok(),
    )
}
