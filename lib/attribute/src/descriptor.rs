//! Attribute descriptors and their canonical string names.
//!
//! A descriptor name has six `:`-separated fields:
//!
//! ```text
//! g3d:<association>:<semantic>:<index>:<data type>:<arity>
//! ```
//!
//! e.g. `g3d:vertex:position:0:float32:3`.

use std::{fmt, str::FromStr};

use crate::{Component, DescriptorError, Element};

/// The topological entity that each element of an attribute corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Association {
    /// Exactly one value for the whole geometry.
    All,
    /// No elements.
    None,
    Vertex,
    Face,
    Corner,
    /// One edge per corner; the edge leaving that corner.
    Edge,
    Subgeometry,
    Instance,
}

impl Association {
    pub const ALL: [Association; 8] = [
        Association::All,
        Association::None,
        Association::Vertex,
        Association::Face,
        Association::Corner,
        Association::Edge,
        Association::Subgeometry,
        Association::Instance,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Association::All => "all",
            Association::None => "none",
            Association::Vertex => "vertex",
            Association::Face => "face",
            Association::Corner => "corner",
            Association::Edge => "edge",
            Association::Subgeometry => "subgeometry",
            Association::Instance => "instance",
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Association {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Association::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| DescriptorError::UnknownAssociation(s.to_owned()))
    }
}

/// The meaning of an attribute.
///
/// Only [Position](Semantic::Position), [Index](Semantic::Index) and
/// [FaceSize](Semantic::FaceSize) determine topology; everything else is carried through
/// transformations as opaque data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Semantic {
    Position,
    Normal,
    Tangent,
    Binormal,
    Color,
    Uv,
    /// Corner -> vertex mapping.
    Index,
    /// Number of corners per face.
    FaceSize,
    /// First vertex of each subgeometry, written by merges.
    VertexOffset,
    /// First corner of each subgeometry, written by merges.
    IndexOffset,
    MaterialId,
    Visibility,
    Transform,
    /// Application-defined semantic.
    Other(String),
}

impl Semantic {
    pub fn as_str(&self) -> &str {
        match self {
            Semantic::Position => "position",
            Semantic::Normal => "normal",
            Semantic::Tangent => "tangent",
            Semantic::Binormal => "binormal",
            Semantic::Color => "color",
            Semantic::Uv => "uv",
            Semantic::Index => "index",
            Semantic::FaceSize => "facesize",
            Semantic::VertexOffset => "vertexoffset",
            Semantic::IndexOffset => "indexoffset",
            Semantic::MaterialId => "materialid",
            Semantic::Visibility => "visibility",
            Semantic::Transform => "transform",
            Semantic::Other(name) => name,
        }
    }
}

impl fmt::Display for Semantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Semantic {
    fn from(s: &str) -> Self {
        match s {
            "position" => Semantic::Position,
            "normal" => Semantic::Normal,
            "tangent" => Semantic::Tangent,
            "binormal" => Semantic::Binormal,
            "color" => Semantic::Color,
            "uv" => Semantic::Uv,
            "index" => Semantic::Index,
            "facesize" => Semantic::FaceSize,
            "vertexoffset" => Semantic::VertexOffset,
            "indexoffset" => Semantic::IndexOffset,
            "materialid" => Semantic::MaterialId,
            "visibility" => Semantic::Visibility,
            "transform" => Semantic::Transform,
            other => Semantic::Other(other.to_owned()),
        }
    }
}

/// The type of each component stored in an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
        DataType::Float32,
        DataType::Float64,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::Float32 => "float32",
            DataType::Float64 => "float64",
        }
    }

    /// Size of one component, in bytes.
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            DataType::Int8 => size_of::<i8>(),
            DataType::Int16 => size_of::<i16>(),
            DataType::Int32 => size_of::<i32>(),
            DataType::Int64 => size_of::<i64>(),
            DataType::Float32 => size_of::<f32>(),
            DataType::Float64 => size_of::<f64>(),
        }
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DescriptorError::UnknownDataType(s.to_owned()))
    }
}

/// Identifies an attribute: what it is attached to, what it means, and how its elements are
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    pub association: Association,
    pub semantic: Semantic,
    /// Distinguishes several attributes sharing an association and semantic (e.g. uv channels).
    pub index: u32,
    pub data_type: DataType,
    /// Number of components per element.
    pub data_arity: u32,
}

impl AttributeDescriptor {
    pub const PREFIX: &'static str = "g3d";

    pub fn new(
        association: Association,
        semantic: Semantic,
        index: u32,
        data_type: DataType,
        data_arity: u32,
    ) -> Self {
        Self {
            association,
            semantic,
            index,
            data_type,
            data_arity,
        }
    }

    /// A descriptor whose data type and arity are those of `T`.
    pub fn of<T: Element>(association: Association, semantic: Semantic, index: u32) -> Self {
        Self::new(
            association,
            semantic,
            index,
            <T::Component as Component>::TYPE,
            T::ARITY as u32,
        )
    }

    /// `g3d:vertex:position:0:float32:3`
    pub fn position() -> Self {
        Self::new(
            Association::Vertex,
            Semantic::Position,
            0,
            DataType::Float32,
            3,
        )
    }

    /// Normals attached to `association`, as `float32x3`.
    pub fn normal(association: Association) -> Self {
        Self::new(association, Semantic::Normal, 0, DataType::Float32, 3)
    }

    /// `g3d:corner:index:0:int32:1`
    pub fn index() -> Self {
        Self::new(Association::Corner, Semantic::Index, 0, DataType::Int32, 1)
    }

    /// `g3d:all:facesize:0:int32:1`
    pub fn face_size() -> Self {
        Self::new(Association::All, Semantic::FaceSize, 0, DataType::Int32, 1)
    }

    /// `g3d:subgeometry:vertexoffset:0:int32:1`
    pub fn vertex_offset() -> Self {
        Self::new(
            Association::Subgeometry,
            Semantic::VertexOffset,
            0,
            DataType::Int32,
            1,
        )
    }

    /// `g3d:subgeometry:indexoffset:0:int32:1`
    pub fn index_offset() -> Self {
        Self::new(
            Association::Subgeometry,
            Semantic::IndexOffset,
            0,
            DataType::Int32,
            1,
        )
    }

    /// `g3d:vertex:color:0:float32:4`
    pub fn vertex_color() -> Self {
        Self::new(Association::Vertex, Semantic::Color, 0, DataType::Float32, 4)
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.data_arity as usize
    }

    /// The canonical name of this descriptor, which is also the identity of any attribute it
    /// describes.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            Self::PREFIX,
            self.association,
            self.semantic,
            self.index,
            self.data_type,
            self.data_arity
        )
    }
}

impl FromStr for AttributeDescriptor {
    type Err = DescriptorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = name.split(':').collect();
        let [prefix, association, semantic, index, data_type, arity] = fields[..] else {
            return Err(DescriptorError::FieldCount(name.to_owned(), fields.len()));
        };
        if prefix != Self::PREFIX {
            return Err(DescriptorError::Prefix(name.to_owned()));
        }
        let index = index
            .parse()
            .map_err(|e| DescriptorError::Index(index.to_owned(), e))?;
        let data_arity = match arity.parse::<u32>() {
            Ok(0) | Err(_) => return Err(DescriptorError::Arity(arity.to_owned())),
            Ok(a) => a,
        };
        if semantic.is_empty() {
            return Err(DescriptorError::EmptySemantic(name.to_owned()));
        }
        Ok(Self {
            association: association.parse()?,
            semantic: Semantic::from(semantic),
            index,
            data_type: data_type.parse()?,
            data_arity,
        })
    }
}

impl TryFrom<&str> for AttributeDescriptor {
    type Error = DescriptorError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
