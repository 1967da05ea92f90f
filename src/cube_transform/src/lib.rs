#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Sticker-level state of an N×N cube and the geometric transforms applied
//! to it: band (slice) turns, single face turns and whole-cube rotations.

use thiserror::Error;

pub mod adjacency;
pub mod chunk;
pub mod config;
pub mod cube;
pub mod face;
pub mod rotation;
pub mod transform;
pub mod turn;

pub use chunk::EdgeKind;
pub use config::{ConfigError, CubeConfig};
pub use cube::CubeState;
pub use face::{Face, Faces};
pub use rotation::Axis;
pub use transform::Transform;
pub use turn::{Angle, turn_face};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("A face of {len} stickers is not a square of side at least 2")]
    InvalidShape { len: usize },
    #[error("Depth {depth} is out of range for a cube of size {size}")]
    OutOfRange { depth: usize, size: usize },
    #[error("Expected an edge of {expected} stickers but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

/// An identifier or angle passed in by a caller that does not name anything
/// this crate knows how to turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("Unsupported turn of {0} degrees, expected one of -90, 90 or 180")]
    Degrees(i32),
    #[error("Unknown face {0:?}, expected one of U, L, F, R, B or D")]
    Face(String),
    #[error("Unknown axis {0:?}, expected one of X, Y or Z")]
    Axis(String),
}
