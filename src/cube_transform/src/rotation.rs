//! Whole-cube rotations. These change which physical face sits in each
//! slot of the cube, so every face is relabelled, and faces whose reading
//! direction changes on the way are turned to match.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    InvalidArgument,
    cube::CubeState,
    face::{Face, Faces},
    turn::{Angle, turn_square},
};

use self::Reorient::{Keep, Turn};

/// Axes of whole-cube rotation. `X` turns like `R`, `Y` like `U` and `Z`
/// like `F`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl FromStr for Axis {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(InvalidArgument::Axis(s.to_owned())),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// What happens to a face on its way into a new slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Reorient {
    Keep,
    Turn(Angle),
}

const CW: Reorient = Turn(Angle::Clockwise);
const CCW: Reorient = Turn(Angle::CounterClockwise);
const FLIP: Reorient = Turn(Angle::Half);

/// For each destination slot in `U, L, F, R, B, D` order, the slot the face
/// comes from and how it is reoriented.
fn rotation_table(axis: Axis, angle: Angle) -> [(Face, Reorient); 6] {
    use Face::{B, D, F, L, R, U};

    match (axis, angle) {
        (Axis::X, Angle::Clockwise) => [
            (F, Keep),
            (L, CCW),
            (D, Keep),
            (R, CW),
            (U, FLIP),
            (B, FLIP),
        ],
        (Axis::X, Angle::CounterClockwise) => [
            (B, FLIP),
            (L, CW),
            (U, Keep),
            (R, CCW),
            (D, FLIP),
            (F, Keep),
        ],
        (Axis::X, Angle::Half) => [
            (D, Keep),
            (L, FLIP),
            (B, FLIP),
            (R, FLIP),
            (F, FLIP),
            (U, Keep),
        ],
        (Axis::Y, Angle::Clockwise) => [
            (U, CW),
            (F, Keep),
            (R, Keep),
            (B, Keep),
            (L, Keep),
            (D, CCW),
        ],
        (Axis::Y, Angle::CounterClockwise) => [
            (U, CCW),
            (B, Keep),
            (L, Keep),
            (F, Keep),
            (R, Keep),
            (D, CW),
        ],
        (Axis::Y, Angle::Half) => [
            (U, FLIP),
            (R, Keep),
            (B, Keep),
            (L, Keep),
            (F, Keep),
            (D, FLIP),
        ],
        (Axis::Z, Angle::Clockwise) => [
            (L, CW),
            (D, CW),
            (F, CW),
            (U, CW),
            (B, CCW),
            (R, CW),
        ],
        (Axis::Z, Angle::CounterClockwise) => [
            (R, CCW),
            (U, CCW),
            (F, CCW),
            (D, CCW),
            (B, CW),
            (L, CCW),
        ],
        (Axis::Z, Angle::Half) => [
            (D, FLIP),
            (R, FLIP),
            (F, FLIP),
            (L, FLIP),
            (B, FLIP),
            (U, FLIP),
        ],
    }
}

impl<T: Clone> CubeState<T> {
    /// Rotate the whole cube about `axis`. No stickers move relative to one
    /// another; only the frame they are described in changes.
    #[must_use]
    pub fn rotate(&self, axis: Axis, angle: Angle) -> CubeState<T> {
        debug!("Rotating the cube about {axis} by {angle}");

        let table = rotation_table(axis, angle);
        let faces = Faces::from_fn(|slot| {
            let (source, reorient) = table[slot as usize];
            let face = self.face(source);
            match reorient {
                Keep => face.to_vec(),
                Turn(angle) => turn_square(face, angle),
            }
        });

        CubeState::from_faces_unchecked(faces, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, rotation_table};
    use crate::{InvalidArgument, face::Face, turn::Angle};
    use itertools::Itertools;

    fn sources(axis: Axis, angle: Angle) -> Vec<Face> {
        rotation_table(axis, angle)
            .iter()
            .map(|(face, _)| *face)
            .collect_vec()
    }

    #[test]
    fn parse_axis() {
        assert_eq!("X".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("Y".parse::<Axis>(), Ok(Axis::Y));
        assert_eq!(
            "y".parse::<Axis>(),
            Err(InvalidArgument::Axis("y".to_owned()))
        );
        assert_eq!(
            "W".parse::<Axis>(),
            Err(InvalidArgument::Axis("W".to_owned()))
        );

        for axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>(), Ok(axis));
        }
    }

    #[test]
    fn tables_are_permutations() {
        for (axis, angle) in Axis::ALL.into_iter().cartesian_product(Angle::ALL) {
            assert!(sources(axis, angle).iter().all_unique(), "{axis} {angle}");
        }
    }
}
