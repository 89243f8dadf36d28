use std::num::ParseIntError;

use crate::DataType;

/// Errors from parsing an [AttributeDescriptor](crate::AttributeDescriptor) name.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("attribute name {0:?} should have 6 ':'-separated fields, found {1}")]
    FieldCount(String, usize),
    #[error("attribute name {0:?} does not start with \"g3d\"")]
    Prefix(String),
    #[error("unknown association {0:?}")]
    UnknownAssociation(String),
    #[error("attribute name {0:?} has an empty semantic")]
    EmptySemantic(String),
    #[error("unknown data type {0:?}")]
    UnknownDataType(String),
    #[error("invalid semantic index {0:?}")]
    Index(String, #[source] ParseIntError),
    #[error("invalid data arity {0:?}; must be a positive integer")]
    Arity(String),
}

/// Errors related to [Attributes](crate::Attribute) and their data.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("attribute {name} holds {found_type} x{found_arity} elements, requested {expected_type} x{expected_arity}")]
    TypeMismatch {
        name: String,
        expected_type: DataType,
        expected_arity: usize,
        found_type: DataType,
        found_arity: usize,
    },
    #[error("attribute data of type {found} does not match declared type {expected}")]
    DataType { expected: DataType, found: DataType },
    #[error("{len} components cannot be split into elements of arity {arity}")]
    Arity { len: usize, arity: usize },
    #[error("element index {index} out of range: 0..{len}")]
    OutOfRange { index: usize, len: usize },
    #[error("cannot concatenate attribute {found} onto {expected}")]
    NameMismatch { expected: String, found: String },
}
