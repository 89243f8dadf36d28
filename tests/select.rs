use g3d::{shapes, Association, Attribute, Error, GeometryAttributes, Semantic};
use nalgebra::vector;

fn labelled_grid() -> GeometryAttributes {
    shapes::grid(3, 2).unwrap().with_attribute(Attribute::typed(
        Association::Face,
        Semantic::MaterialId,
        0,
        0..6i32,
    ))
}

#[test]
fn select_all_is_identity() {
    let grid = labelled_grid();
    let all = grid.select_faces(&[0, 1, 2, 3, 4, 5]).unwrap().unwrap();
    assert!(all.ptr_eq(&grid));
}

#[test]
fn select_nothing() {
    assert!(labelled_grid().select_faces(&[]).unwrap().is_none());
}

#[test]
fn select_compacts_vertices() {
    let grid = labelled_grid();
    // faces 2 and 5 are stacked in the last column and share an edge
    let g = grid.select_faces(&[5, 2]).unwrap().unwrap();
    assert_eq!(g.num_faces(), 2);
    assert_eq!(g.num_vertices(), 6);
    assert_eq!(g.indices(), Some(vec![0, 1, 2, 3, 4, 5, 1, 0]));
    assert_eq!(
        g.find(Association::Face, &Semantic::MaterialId)
            .unwrap()
            .to_vec::<i32>()
            .unwrap(),
        vec![5, 2]
    );
    assert_eq!(
        g.positions().unwrap(),
        vec![
            vector![2.0, 1.0, 0.0],
            vector![3.0, 1.0, 0.0],
            vector![3.0, 2.0, 0.0],
            vector![2.0, 2.0, 0.0],
            vector![2.0, 0.0, 0.0],
            vector![3.0, 0.0, 0.0],
        ]
    );
    assert!(g.validate().is_ok());
}

#[test]
fn select_triangles() {
    let tris = shapes::unit_cube().triangulate_quad_mesh().unwrap();
    let g = tris.select_faces(&[0]).unwrap().unwrap();
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.indices(), Some(vec![0, 1, 2]));
}

#[test]
fn select_out_of_range() {
    assert!(matches!(
        labelled_grid().select_faces(&[6]),
        Err(Error::IndexOutOfRange { index: 6, len: 6 })
    ));
}

#[test]
fn copy_and_delete() {
    let grid = labelled_grid();
    let even = grid.copy_faces(|f| f % 2 == 0).unwrap();
    let odd = grid.delete_faces(|f| f % 2 == 0).unwrap();
    let ids = |g: &GeometryAttributes| {
        g.find(Association::Face, &Semantic::MaterialId)
            .unwrap()
            .to_vec::<i32>()
            .unwrap()
    };
    assert_eq!(ids(&even), vec![0, 2, 4]);
    assert_eq!(ids(&odd), vec![1, 3, 5]);
    // no vertex compaction
    assert_eq!(even.num_vertices(), grid.num_vertices());

    let range = grid.copy_face_range(1, 3).unwrap();
    assert_eq!(ids(&range), vec![1, 2, 3]);
    assert!(matches!(
        grid.copy_face_range(4, 3),
        Err(Error::IndexOutOfRange { index: 6, len: 6 })
    ));
    assert!(matches!(
        grid.copy_face_range(1, usize::MAX),
        Err(Error::IndexOutOfRange { len: 6, .. })
    ));
    assert_eq!(grid.copy_face_range(6, 0).unwrap().num_faces(), 0);
}

#[test]
fn face_groups() {
    let grid = labelled_grid();
    let groups = grid.copy_face_groups(4).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].num_faces(), 4);
    assert_eq!(groups[1].num_faces(), 2);
    assert!(matches!(
        grid.copy_face_groups(0),
        Err(Error::ZeroGroupSize)
    ));
    assert!(GeometryAttributes::empty()
        .copy_face_groups(3)
        .unwrap()
        .is_empty());
}
