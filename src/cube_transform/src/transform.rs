use std::fmt::{self, Display};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Angle, Axis, CubeState, Face, TransformError};

/// A single already-parsed move, as handed over by whatever reads move
/// notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transform {
    /// Turn the band around `face`, `depth` layers in from the outside.
    Band { face: Face, angle: Angle, depth: usize },
    /// Turn the stickers of `face` without moving its neighbours.
    TurnFace { face: Face, angle: Angle },
    /// Reorient the whole cube.
    Rotate { axis: Axis, angle: Angle },
}

impl Transform {
    /// The transform that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Transform::Band { face, angle, depth } => Transform::Band {
                face,
                angle: angle.inverse(),
                depth,
            },
            Transform::TurnFace { face, angle } => Transform::TurnFace {
                face,
                angle: angle.inverse(),
            },
            Transform::Rotate { axis, angle } => Transform::Rotate {
                axis,
                angle: angle.inverse(),
            },
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Band { face, angle, depth } => {
                write!(f, "band {face} {angle} at depth {depth}")
            }
            Transform::TurnFace { face, angle } => write!(f, "face {face} {angle}"),
            Transform::Rotate { axis, angle } => write!(f, "rotate {axis} {angle}"),
        }
    }
}

impl<T: Clone> CubeState<T> {
    pub fn apply(&self, transform: Transform) -> Result<CubeState<T>, TransformError> {
        match transform {
            Transform::Band { face, angle, depth } => self.turn_band(face, angle, depth),
            Transform::TurnFace { face, angle } => Ok(self.turn_face(face, angle)),
            Transform::Rotate { axis, angle } => Ok(self.rotate(axis, angle)),
        }
    }

    /// Apply transforms one after another, each to the result of the last.
    ///
    /// # Errors
    ///
    /// The first transform that fails. `self` is left as it was and none of
    /// the earlier transforms are kept.
    pub fn apply_all(
        &self,
        transforms: impl IntoIterator<Item = Transform>,
    ) -> Result<CubeState<T>, TransformError> {
        let mut state = self.clone();
        for (i, transform) in transforms.into_iter().enumerate() {
            debug!("Applying transform {i}: {transform}");
            state = state.apply(transform)?;
        }

        Ok(state)
    }
}
