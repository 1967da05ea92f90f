use std::fmt::{self, Display};

use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    InvalidArgument, TransformError,
    adjacency::band,
    chunk::{EdgeKind, edge_positions, read_edge, side_length, write_edge},
    cube::CubeState,
    face::Face,
};

/// How far a face, band or the whole cube is turned. Clockwise is as seen
/// from outside the reference face, or from the positive end of an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Angle {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Angle {
    pub const ALL: [Self; 3] = [Angle::Clockwise, Angle::CounterClockwise, Angle::Half];

    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Angle::Clockwise => 90,
            Angle::CounterClockwise => -90,
            Angle::Half => 180,
        }
    }

    /// The angle that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Angle::Clockwise => Angle::CounterClockwise,
            Angle::CounterClockwise => Angle::Clockwise,
            Angle::Half => Angle::Half,
        }
    }
}

impl TryFrom<i32> for Angle {
    type Error = InvalidArgument;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            90 => Ok(Angle::Clockwise),
            -90 => Ok(Angle::CounterClockwise),
            180 => Ok(Angle::Half),
            _ => Err(InvalidArgument::Degrees(degrees)),
        }
    }
}

impl From<Angle> for i32 {
    fn from(angle: Angle) -> Self {
        angle.degrees()
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Rotate the stickers of a single face without touching its neighbours.
///
/// # Errors
///
/// If the face is not square
pub fn turn_face<T: Clone>(face: &[T], angle: Angle) -> Result<Vec<T>, TransformError> {
    side_length(face.len())?;
    Ok(turn_square(face, angle))
}

/// [`turn_face`] for a face already known to be square.
pub(crate) fn turn_square<T: Clone>(face: &[T], angle: Angle) -> Vec<T> {
    let size = face.len().isqrt();

    // Reading each column bottom to top gives the clockwise rows, reading
    // the columns right to left gives the counter-clockwise ones
    let positions = match angle {
        Angle::Clockwise => (0..size)
            .flat_map(|col| edge_positions(size, EdgeKind::Col, col).rev())
            .collect_vec(),
        Angle::CounterClockwise => (0..size)
            .rev()
            .flat_map(|col| edge_positions(size, EdgeKind::Col, col))
            .collect_vec(),
        Angle::Half => (0..face.len()).rev().collect_vec(),
    };

    positions
        .into_iter()
        .map(|position| face[position].clone())
        .collect_vec()
}

/// Cycle band edges, given in clockwise order, by `angle`.
fn cycle_band<E>(edges: &mut [E], angle: Angle) {
    match angle {
        Angle::Clockwise => edges.rotate_right(1),
        Angle::CounterClockwise => edges.rotate_left(1),
        Angle::Half => edges.rotate_left(2),
    }
}

impl<T: Clone> CubeState<T> {
    /// Turn the band of four edges surrounding `face`, `depth` layers in
    /// from the outside of the cube.
    ///
    /// `depth` 0 is the outermost layer of stickers on the neighbouring
    /// faces. The stickers of `face` itself are left alone; combine with
    /// [`turn_face`] for a full outer-layer turn.
    ///
    /// # Errors
    ///
    /// If `depth` is not less than the cube's size
    pub fn turn_band(
        &self,
        face: Face,
        angle: Angle,
        depth: usize,
    ) -> Result<CubeState<T>, TransformError> {
        if depth >= self.size() {
            return Err(TransformError::OutOfRange {
                depth,
                size: self.size(),
            });
        }

        debug!("Turning the {face} band by {angle} at depth {depth}");

        let entries = band(face);
        let mut edges = entries
            .iter()
            .map(|entry| {
                read_edge(
                    self.face(entry.face),
                    entry.kind,
                    depth,
                    entry.forward,
                    entry.mirror,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        cycle_band(&mut edges, angle);

        let mut faces = self.faces().clone();
        for (entry, edge) in entries.iter().zip(edges) {
            trace!("Writing {:?} {} of {}", entry.kind, depth, entry.face);
            faces[entry.face] = write_edge(
                &faces[entry.face],
                entry.kind,
                depth,
                entry.forward,
                entry.mirror,
                &edge,
            )?;
        }

        Ok(CubeState::from_faces_unchecked(faces, self.size()))
    }

    /// Turn the stickers of one face in place, leaving its neighbours alone.
    #[must_use]
    pub fn turn_face(&self, face: Face, angle: Angle) -> CubeState<T> {
        let mut faces = self.faces().clone();
        faces[face] = turn_square(&faces[face], angle);
        CubeState::from_faces_unchecked(faces, self.size())
    }
}
