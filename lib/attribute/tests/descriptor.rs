//! Descriptor name parsing and formatting.

use g3d_attribute::{Association, AttributeDescriptor, DataType, DescriptorError, Semantic};

#[test]
fn standard_names() {
    assert_eq!(
        AttributeDescriptor::position().name(),
        "g3d:vertex:position:0:float32:3"
    );
    assert_eq!(AttributeDescriptor::index().name(), "g3d:corner:index:0:int32:1");
    assert_eq!(AttributeDescriptor::face_size().name(), "g3d:all:facesize:0:int32:1");
    assert_eq!(
        AttributeDescriptor::vertex_offset().name(),
        "g3d:subgeometry:vertexoffset:0:int32:1"
    );
    assert_eq!(
        AttributeDescriptor::index_offset().name(),
        "g3d:subgeometry:indexoffset:0:int32:1"
    );
}

#[test]
fn parse_fields() {
    let desc: AttributeDescriptor = "g3d:edge:uv:2:float64:2".parse().unwrap();
    assert_eq!(desc.association, Association::Edge);
    assert_eq!(desc.semantic, Semantic::Uv);
    assert_eq!(desc.index, 2);
    assert_eq!(desc.data_type, DataType::Float64);
    assert_eq!(desc.data_arity, 2);
}

#[test]
fn unknown_semantic_is_kept() {
    let name = "g3d:instance:flavor:0:int8:1";
    let desc = AttributeDescriptor::try_from(name).unwrap();
    assert_eq!(desc.semantic, Semantic::Other("flavor".to_owned()));
    assert_eq!(desc.name(), name);
}

#[test]
fn every_association_round_trips() {
    for association in Association::ALL {
        for data_type in DataType::ALL {
            let desc = AttributeDescriptor::new(association, Semantic::Color, 1, data_type, 4);
            assert_eq!(desc.name().parse::<AttributeDescriptor>().unwrap(), desc);
        }
    }
}

#[test]
fn rejects_malformed_names() {
    assert!(matches!(
        "g3d:vertex:position:0:float32".parse::<AttributeDescriptor>(),
        Err(DescriptorError::FieldCount(_, 5))
    ));
    assert!(matches!(
        "vim:vertex:position:0:float32:3".parse::<AttributeDescriptor>(),
        Err(DescriptorError::Prefix(_))
    ));
    assert!(matches!(
        "g3d:halfedge:position:0:float32:3".parse::<AttributeDescriptor>(),
        Err(DescriptorError::UnknownAssociation(a)) if a == "halfedge"
    ));
    assert!(matches!(
        "g3d:vertex:position:0:float16:3".parse::<AttributeDescriptor>(),
        Err(DescriptorError::UnknownDataType(_))
    ));
    assert!(matches!(
        "g3d:vertex:position:x:float32:3".parse::<AttributeDescriptor>(),
        Err(DescriptorError::Index(..))
    ));
    assert!(matches!(
        "g3d:vertex:position:0:float32:0".parse::<AttributeDescriptor>(),
        Err(DescriptorError::Arity(_))
    ));
    assert!(matches!(
        "g3d:vertex::0:float32:3".parse::<AttributeDescriptor>(),
        Err(DescriptorError::EmptySemantic(_))
    ));
}
