use itertools::Itertools;

use crate::{
    TransformError,
    chunk::side_length,
    face::{Face, Faces},
};

/// The stickers of all six faces of an N×N cube. Each face is stored
/// row-major as seen from outside the cube.
///
/// Every face has the same length and that length is a perfect square; this
/// is checked once on construction and kept by every transform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState<T> {
    faces: Faces<Vec<T>>,
    size: usize,
}

impl<T: Clone> CubeState<T> {
    /// Build a cube from six faces.
    ///
    /// # Errors
    ///
    /// If the faces differ in length, or if that length is not the square of
    /// a number that is at least two
    pub fn new(faces: Faces<Vec<T>>) -> Result<Self, TransformError> {
        let size = side_length(faces[Face::U].len())?;
        if let Some((_, face)) = faces.iter().find(|(_, face)| face.len() != size * size) {
            return Err(TransformError::InvalidShape { len: face.len() });
        }

        Ok(CubeState { faces, size })
    }

    /// A cube where every sticker on a face matches that face's colour.
    pub fn solved(size: usize, colours: Faces<T>) -> Result<Self, TransformError> {
        let len = size
            .checked_mul(size)
            .ok_or(TransformError::InvalidShape { len: usize::MAX })?;
        side_length(len)?;

        Ok(CubeState {
            faces: colours.map(|_, colour| vec![colour; len]),
            size,
        })
    }

    /// Replaces all six faces at once. Only for transforms that already
    /// preserve the shape.
    pub(crate) fn from_faces_unchecked(faces: Faces<Vec<T>>, size: usize) -> Self {
        debug_assert!(faces.iter().all(|(_, face)| face.len() == size * size));
        CubeState { faces, size }
    }
}

impl<T> CubeState<T> {
    /// The number of stickers along one edge of a face.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[T] {
        &self.faces[face]
    }

    #[must_use]
    pub fn faces(&self) -> &Faces<Vec<T>> {
        &self.faces
    }

    #[must_use]
    pub fn into_faces(self) -> Faces<Vec<T>> {
        self.faces
    }
}

impl<T: PartialEq> CubeState<T> {
    /// Whether every face shows a single colour.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|(_, face)| face.iter().all_equal())
    }
}

#[cfg(test)]
mod tests {
    use super::CubeState;
    use crate::{
        TransformError,
        face::{Face, Faces},
    };

    #[test]
    fn new_validates_shape() {
        let square = Faces::from_fn(|_| vec![0; 9]);
        assert_eq!(CubeState::new(square).unwrap().size(), 3);

        let mut uneven = Faces::from_fn(|_| vec![0; 9]);
        uneven[Face::R] = vec![0; 4];
        assert_eq!(
            CubeState::new(uneven),
            Err(TransformError::InvalidShape { len: 4 })
        );

        let not_square = Faces::from_fn(|_| vec![0; 6]);
        assert_eq!(
            CubeState::new(not_square),
            Err(TransformError::InvalidShape { len: 6 })
        );

        let single = Faces::from_fn(|_| vec![0; 1]);
        assert_eq!(
            CubeState::new(single),
            Err(TransformError::InvalidShape { len: 1 })
        );
    }

    #[test]
    fn solved_cube() {
        let cube = CubeState::solved(4, Faces::from_fn(|face| face as u8)).unwrap();
        assert_eq!(cube.size(), 4);
        assert_eq!(cube.face(Face::B), [4; 16]);
        assert!(cube.is_solved());

        let mut faces = cube.into_faces();
        faces[Face::F][5] = 0;
        assert!(!CubeState::new(faces).unwrap().is_solved());

        assert_eq!(
            CubeState::solved(1, Faces::from_fn(|_| ())),
            Err(TransformError::InvalidShape { len: 1 })
        );
    }

    #[test]
    fn solved_rejects_sizes_that_overflow() {
        assert_eq!(
            CubeState::solved(usize::MAX, Faces::from_fn(|_| ())),
            Err(TransformError::InvalidShape { len: usize::MAX })
        );
        assert_eq!(
            CubeState::solved(1 << (usize::BITS / 2), Faces::from_fn(|_| ())),
            Err(TransformError::InvalidShape { len: usize::MAX })
        );
    }
}
