use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Parse

/// A malformed member path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("member path is empty")]
    Empty,

    #[error("empty segment at offset {offset} in member path `{path}`")]
    EmptySegment { offset: usize, path: String },
}

// -----------------------------------------------------------------------------
// Access

/// A path segment that names no field or property of the current value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("segment {index} (`{segment}`) is not a field or property of `{type_path}`")]
pub struct ResolutionError {
    /// Position of the segment in the path.
    pub index: usize,
    pub segment: String,
    /// Runtime type of the value the segment was resolved against.
    pub type_path: &'static str,
}

/// A value whose type differs from the member's declared type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("member `{member}` holds `{expected}`, cannot store `{provided}`")]
pub struct TypeMismatchError {
    pub member: &'static str,
    pub expected: &'static str,
    pub provided: &'static str,
}

/// A write to, or a mutable hop through, a member without that capability.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("member `{member}` of `{type_path}` (segment {index}) is read-only")]
pub struct ReadOnlyError {
    pub index: usize,
    pub member: &'static str,
    /// The declaring type.
    pub type_path: &'static str,
}

/// An optional member that is `None` where the path continues through it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("member `{member}` of `{type_path}` (segment {index}) is empty, the path cannot continue")]
pub struct EmptyValueError {
    pub index: usize,
    pub member: &'static str,
    /// The declaring type.
    pub type_path: &'static str,
}

/// An error returned from a failed path access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    #[error(transparent)]
    ReadOnly(#[from] ReadOnlyError),

    #[error(transparent)]
    EmptyValue(#[from] EmptyValueError),

    #[error("can't downcast `{provided}` to `{expected}`")]
    Downcast {
        expected: &'static str,
        provided: &'static str,
    },
}
