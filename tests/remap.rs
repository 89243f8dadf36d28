use g3d::{shapes, Association, Attribute, Error, GeometryAttributes, Semantic};
use nalgebra::{vector, Vector3};

fn face_ids(g: &GeometryAttributes) -> Vec<i32> {
    g.find(Association::Face, &Semantic::MaterialId)
        .unwrap()
        .to_vec()
        .unwrap()
}

#[test]
fn triangulate_single_quad() {
    let tris = shapes::unit_quad().triangulate_quad_mesh().unwrap();
    assert_eq!(tris.num_corners_per_face(), 3);
    assert_eq!(tris.num_faces(), 2);
    assert_eq!(tris.indices(), Some(vec![0, 1, 2, 0, 2, 3]));
    assert!(tris.validate().is_ok());
}

#[test]
fn triangulate_repeats_face_values() {
    let grid = shapes::grid(3, 1).unwrap().with_attribute(Attribute::typed(
        Association::Face,
        Semantic::MaterialId,
        0,
        [10i32, 11, 12],
    ));
    let tris = grid.triangulate_quad_mesh().unwrap();
    assert_eq!(face_ids(&tris), vec![10, 10, 11, 11, 12, 12]);
    assert!(tris.validate().is_ok());
}

#[test]
fn triangulate_requires_quads() {
    let tris = shapes::unit_quad().triangulate_quad_mesh().unwrap();
    assert!(matches!(
        tris.triangulate_quad_mesh(),
        Err(Error::FaceSize {
            expected: 4,
            found: 3
        })
    ));
}

#[test]
fn remap_faces() {
    let grid = shapes::grid(3, 1).unwrap().with_attribute(Attribute::typed(
        Association::Face,
        Semantic::MaterialId,
        0,
        [10i32, 11, 12],
    ));
    let g = grid.remap_faces(&[2, 0]).unwrap();
    assert_eq!(g.num_faces(), 2);
    assert_eq!(face_ids(&g), vec![12, 10]);
    assert_eq!(g.indices(), Some(vec![2, 3, 7, 6, 0, 1, 5, 4]));
    // vertices untouched
    assert_eq!(g.num_vertices(), 8);

    assert!(matches!(
        grid.remap_faces(&[3]),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        grid.remap_faces(&[0, usize::MAX]),
        Err(Error::IndexOutOfRange { index: i64::MAX, len: 3 })
    ));
}

#[test]
fn remap_unindexed_adds_index() {
    let g = GeometryAttributes::new([Attribute::typed(
        Association::Vertex,
        Semantic::Position,
        0,
        [Vector3::<f32>::zeros(); 6],
    )])
    .unwrap();
    let r = g.remap_faces(&[1]).unwrap();
    assert_eq!(r.indices(), Some(vec![3, 4, 5]));
    assert_eq!(r.num_vertices(), 6);
    assert!(r.validate().is_ok());
}

#[test]
fn remap_drops_subgeometries() {
    let m = GeometryAttributes::merge(&[shapes::unit_quad(), shapes::unit_quad()]).unwrap();
    assert_eq!(m.num_subgeometries(), 2);
    let r = m.remap_faces(&[0, 1]).unwrap();
    assert_eq!(r.num_subgeometries(), 0);
}

#[test]
fn remap_vertices_identity() {
    let cube = shapes::unit_cube();
    let same = cube.remap_vertices(&(0..8).collect::<Vec<_>>()).unwrap();
    assert_eq!(same, cube);
}

#[test]
fn remap_vertices_reorders() {
    let quad = shapes::unit_quad();
    let r = quad.remap_vertices(&[3, 2, 1, 0]).unwrap();
    assert_eq!(r.indices(), Some(vec![3, 2, 1, 0]));
    assert_eq!(r.positions().unwrap()[0], vector![0.0, 1.0, 0.0]);
    // the same faces, from the same points
    assert_eq!(r.quads().unwrap(), quad.quads().unwrap());
}

#[test]
fn remap_vertices_dangling() {
    assert!(matches!(
        shapes::unit_quad().remap_vertices(&[0, 1, 2]),
        Err(Error::DanglingVertex {
            corner: 3,
            vertex: 3
        })
    ));
    assert!(matches!(
        shapes::unit_quad().remap_vertices(&[0, 1, 2, 3, 9]),
        Err(Error::IndexOutOfRange { index: 9, len: 4 })
    ));
}

#[test]
fn remap_vertices_with_indices() {
    let quad = shapes::unit_quad();
    let r = quad
        .remap_vertices_with_indices(&[0, 1, 2], &[0, 1, 2])
        .unwrap()
        .with_attribute(Attribute::typed(Association::All, Semantic::FaceSize, 0, [3i32]));
    assert_eq!(r.num_vertices(), 3);
    assert_eq!(r.num_faces(), 1);
    assert!(r.validate().is_ok());
    // attribute order is kept
    assert!(r.has_same_attributes(&quad));
}

#[test]
fn flipped_remapping() {
    assert_eq!(
        shapes::unit_quad().index_flipped_remapping(),
        vec![3, 2, 1, 0]
    );
    let tris = shapes::unit_quad().triangulate_quad_mesh().unwrap();
    assert_eq!(tris.index_flipped_remapping(), vec![2, 1, 0, 5, 4, 3]);
}

#[test]
fn flip_negates_normals() {
    let quad = shapes::unit_quad().compute_face_normals().unwrap();
    let normal = |g: &GeometryAttributes| {
        g.normal_attribute()
            .unwrap()
            .get::<Vector3<f32>>(0)
            .unwrap()
            .unwrap()
    };
    assert_eq!(normal(&quad), vector![0.0, 0.0, 1.0]);
    let flipped = quad.flip_winding_order().unwrap();
    assert_eq!(normal(&flipped), vector![0.0, 0.0, -1.0]);
    assert_eq!(flipped.indices(), Some(vec![3, 2, 1, 0]));
    assert_eq!(flipped.flip_winding_order().unwrap(), quad);
}
