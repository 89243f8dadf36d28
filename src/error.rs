use g3d_attribute::{AttributeError, DescriptorError};

/// Errors related to [GeometryAttributes](crate::GeometryAttributes) and the operations on them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    #[error("attribute {0} appears more than once")]
    DuplicateAttribute(String),
    #[error("cannot merge geometries with {expected} and {found} corners per face")]
    CornersPerFaceMismatch { expected: usize, found: usize },
    #[error("operation requires {expected} corners per face, geometry has {found}")]
    FaceSize { expected: usize, found: usize },
    #[error("invalid face size attribute: {0}")]
    InvalidFaceSize(String),
    #[error("corner {corner} references vertex {vertex}, which the remapping removes")]
    DanglingVertex { corner: usize, vertex: usize },
    #[error("index out of range: 0..{len} ∌ {index}")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("index attribute {0} holds values that are not integers")]
    NonIntegralIndex(String),
    #[error("value {0} does not fit in an int32 attribute")]
    Overflow(usize),
    #[error("attribute {name} has {found} elements, expected {expected}")]
    ElementCount {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("{corners} corners cannot be split into faces of {corners_per_face} corners")]
    PartialFace {
        corners: usize,
        corners_per_face: usize,
    },
    #[error("geometry has no vertex positions")]
    MissingPositions,
    #[error("face group size must be positive")]
    ZeroGroupSize,
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}
