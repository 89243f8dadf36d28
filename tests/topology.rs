//! Derived counts, corner/face arithmetic, lookup and validation.

use g3d::{
    shapes, Association, Attribute, AttributeDescriptor, Error, G3d, GeometryAttributes, Header,
    Semantic,
};
use nalgebra::{vector, Vector3};

fn unindexed_triangles() -> GeometryAttributes {
    GeometryAttributes::new([Attribute::typed(
        Association::Vertex,
        Semantic::Position,
        0,
        (0..6).map(|i| vector![i as f32, 0.0, 0.0]),
    )])
    .unwrap()
}

#[test]
fn empty() {
    let g = GeometryAttributes::empty();
    assert_eq!(g.num_vertices(), 0);
    assert_eq!(g.num_corners(), 0);
    assert_eq!(g.num_faces(), 0);
    assert_eq!(g.num_corners_per_face(), 3);
    assert!(g.validate().is_ok());
    assert_eq!(g, GeometryAttributes::default());
}

#[test]
fn counts() {
    let cube = shapes::unit_cube();
    assert_eq!(cube.num_vertices(), 8);
    assert_eq!(cube.num_corners(), 24);
    assert_eq!(cube.num_corners_per_face(), 4);
    assert_eq!(cube.num_faces(), 6);
    assert_eq!(cube.num_subgeometries(), 0);
    assert_eq!(cube.num_instances(), 0);
    assert!(cube.validate().is_ok());

    let g = unindexed_triangles();
    assert!(!g.is_indexed());
    assert_eq!(g.num_corners(), 6);
    assert_eq!(g.num_faces(), 2);
    assert_eq!(g.corner_vertices().unwrap(), (0..6).collect::<Vec<_>>());
}

#[test]
fn vertex_count_without_positions() {
    let g = GeometryAttributes::new([Attribute::typed(
        Association::Vertex,
        Semantic::Uv,
        0,
        [[0.0f32; 2]; 5],
    )])
    .unwrap();
    assert_eq!(g.num_vertices(), 5);
}

#[test]
fn expected_element_count() {
    let grid = shapes::grid(2, 3).unwrap();
    let count = |association| {
        grid.expected_element_count(&AttributeDescriptor::of::<f32>(
            association,
            Semantic::MaterialId,
            0,
        ))
    };
    assert_eq!(count(Association::All), 1);
    assert_eq!(count(Association::None), 0);
    assert_eq!(count(Association::Vertex), 12);
    assert_eq!(count(Association::Face), 6);
    assert_eq!(count(Association::Corner), 24);
    assert_eq!(count(Association::Edge), 24);
    assert_eq!(count(Association::Subgeometry), 0);
}

#[test]
fn corner_arithmetic() {
    let quad = shapes::unit_quad();
    assert_eq!(quad.face_to_corner(2), 8);
    assert_eq!(quad.corner_to_face(7), 1);
    assert_eq!(quad.corner_number(7), 3);
    assert_eq!(
        quad.face_indices_to_corner_indices(&[1, 0]),
        vec![4, 5, 6, 7, 0, 1, 2, 3]
    );
    assert!(quad.face_indices_to_corner_indices(&[usize::MAX]).is_empty());
}

#[test]
fn lookup() {
    let cube = shapes::unit_cube();
    assert_eq!(cube.len(), 3);
    assert!(cube.contains("g3d:vertex:position:0:float32:3"));
    assert_eq!(
        cube.get("g3d:corner:index:0:int32:1").map(Attribute::descriptor),
        Some(&AttributeDescriptor::index())
    );
    assert_eq!(cube.vertex_attributes().count(), 1);
    assert_eq!(cube.corner_attributes().count(), 1);
    assert_eq!(cube.all_attributes().count(), 1);
    assert_eq!(cube.face_attributes().count(), 0);
    assert!(cube.normal_attribute().is_none());
    assert_eq!(cube.positions().map(|p| p.len()), Some(8));
    assert_eq!(cube.indices().map(|i| i.len()), Some(24));
}

#[test]
fn duplicate_names_rejected() {
    let p = shapes::unit_quad().position_attribute().unwrap().clone();
    assert!(matches!(
        GeometryAttributes::new([p.clone(), p]),
        Err(Error::DuplicateAttribute(name)) if name == "g3d:vertex:position:0:float32:3"
    ));
}

#[test]
fn with_and_without() {
    let quad = shapes::unit_quad();
    let uv = Attribute::typed(Association::Vertex, Semantic::Uv, 0, [[0.5f32; 2]; 4]);
    let g = quad.with_attribute(uv.clone());
    assert_eq!(g.len(), 4);
    assert!(g.validate().is_ok());

    // replacing keeps the position in the list
    let moved = quad.position_attribute().unwrap().map(|p: Vector3<f32>| p * 2.0).unwrap();
    let h = g.with_attribute(moved.clone());
    assert_eq!(h.attributes()[0], moved);
    assert!(h.has_same_attributes(&g));
    assert!(!h.has_same_attributes(&quad));

    assert_eq!(g.without_attribute(&uv.name()), quad);
}

#[test]
fn default_attribute() {
    let quad = shapes::unit_quad();
    let color = quad.get_or_default_attribute(&AttributeDescriptor::vertex_color());
    assert_eq!(color.element_count(), 4);
    assert!(color.components::<f32>().unwrap().iter().all(|&c| c == 0.0));
    assert_eq!(
        &quad.get_or_default_attribute(&AttributeDescriptor::position()),
        quad.position_attribute().unwrap()
    );
}

#[test]
fn validate_errors() {
    let quad = shapes::unit_quad();
    let short_uv = Attribute::typed(Association::Vertex, Semantic::Uv, 0, [[0.0f32; 2]; 3]);
    assert!(matches!(
        quad.with_attribute(short_uv).validate(),
        Err(Error::ElementCount { expected: 4, found: 3, .. })
    ));

    let bad_index = Attribute::typed(Association::Corner, Semantic::Index, 0, [0i32, 1, 2, 4]);
    assert!(matches!(
        quad.with_attribute(bad_index).validate(),
        Err(Error::IndexOutOfRange { index: 4, len: 4 })
    ));

    let partial = shapes::triangle_mesh([Vector3::zeros(); 3], [0, 1, 2, 0]);
    assert!(matches!(
        partial.validate(),
        Err(Error::PartialFace { corners: 4, corners_per_face: 3 })
    ));

    let zero = Attribute::typed(Association::All, Semantic::FaceSize, 0, [0i32]);
    assert!(matches!(
        quad.with_attribute(zero).validate(),
        Err(Error::InvalidFaceSize(_))
    ));

    let float_index = Attribute::typed(Association::Corner, Semantic::Index, 0, [0.0f32; 3]);
    assert!(matches!(
        unindexed_triangles().with_attribute(float_index).corner_vertices(),
        Err(Error::NonIntegralIndex(_))
    ));
}

#[test]
fn document() {
    let doc = G3d::from(shapes::unit_cube());
    assert_eq!(doc.header, None);
    assert_eq!(doc.num_faces(), 6);

    let doc = G3d::new(Some(Header::default()), shapes::unit_cube());
    let tris = doc.try_map(GeometryAttributes::triangulate_quad_mesh).unwrap();
    assert_eq!(tris.header, Some(Header::default()));
    assert_eq!(tris.num_faces(), 12);
}

#[test]
fn polygon_faces() {
    let pentagon = shapes::polygon_mesh(
        (0..5).map(|i| {
            let a = i as f32 * std::f32::consts::TAU / 5.0;
            vector![a.cos(), a.sin(), 0.0]
        }),
        0..5,
        5,
    )
    .unwrap();
    assert_eq!(pentagon.num_corners_per_face(), 5);
    assert_eq!(pentagon.num_faces(), 1);
    assert!(pentagon.validate().is_ok());
    let n = pentagon.compute_face_normals().unwrap();
    let normal = n.normal_attribute().unwrap().get::<Vector3<f32>>(0).unwrap().unwrap();
    assert!((normal - vector![0.0, 0.0, 1.0]).norm() < 1e-6);
}

#[test]
fn replace_by_custom_semantic_name() {
    let quad = shapes::unit_quad();
    let flat = Attribute::typed(
        Association::Vertex,
        Semantic::Other("position".into()),
        0,
        [Vector3::<f32>::zeros(); 4],
    );
    assert_eq!(flat.name(), "g3d:vertex:position:0:float32:3");
    let g = quad.with_attribute(flat.clone());
    assert_eq!(g.len(), quad.len());
    assert_eq!(g.attributes()[0], flat);
    assert!(g.has_same_attributes(&quad));
    assert_eq!(
        quad.get_by_descriptor(flat.descriptor()),
        quad.position_attribute()
    );
}
