use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::InvalidArgument;

/// One of the six faces of the cube, named by its position in the current
/// reference frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    U,
    L,
    F,
    R,
    B,
    D,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::{B, D, F, L, R, U};
        let v = [U, L, F, R, B, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::R => Face::L,
            Face::B => Face::F,
            Face::D => Face::U,
        }
    }
}

impl FromStr for Face {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "L" => Ok(Face::L),
            "F" => Ok(Face::F),
            "R" => Ok(Face::R),
            "B" => Ok(Face::B),
            "D" => Ok(Face::D),
            _ => Err(InvalidArgument::Face(s.to_owned())),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Face::U => "U",
            Face::L => "L",
            Face::F => "F",
            Face::R => "R",
            Face::B => "B",
            Face::D => "D",
        };
        f.write_str(letter)
    }
}

/// A value for each of the six faces, stored in `Face::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Faces<T>([T; 6]);

impl<T> Faces<T> {
    /// Wrap six values given in `U, L, F, R, B, D` order.
    #[must_use]
    pub fn new(values: [T; 6]) -> Self {
        Faces(values)
    }

    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Faces(Face::ALL.map(&mut f))
    }

    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(Face, T) -> U) -> Faces<U> {
        let mut i = 0;
        Faces(self.0.map(|value| {
            let face = Face::ALL[i];
            i += 1;
            f(face, value)
        }))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; 6] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> [T; 6] {
        self.0
    }
}

impl<T> Index<Face> for Faces<T> {
    type Output = T;

    fn index(&self, index: Face) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl<T> IndexMut<Face> for Faces<T> {
    fn index_mut(&mut self, index: Face) -> &mut Self::Output {
        &mut self.0[index as usize]
    }
}
