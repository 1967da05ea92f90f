//! Which edges of which faces make up the band around each face.
//!
//! For every reference face the four neighbouring edges are listed in the
//! order they cycle during a clockwise turn seen from outside that face:
//! the stickers on entry `i` move to entry `i + 1`. `forward` and `mirror`
//! are passed straight to [`read_edge`](crate::chunk::read_edge) and
//! [`write_edge`](crate::chunk::write_edge). They keep depth counting inward
//! from the reference face and keep stickers in the same orientation as they
//! cross the fold between two faces. The table holds for every cube size.

use crate::{
    chunk::EdgeKind::{self, Col, Row},
    face::{
        Face::{self, B, D, F, L, R, U},
        Faces,
    },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub face: Face,
    pub kind: EdgeKind,
    pub forward: bool,
    pub mirror: bool,
}

const fn entry(face: Face, kind: EdgeKind, forward: bool, mirror: bool) -> AdjacencyEntry {
    AdjacencyEntry {
        face,
        kind,
        forward,
        mirror,
    }
}

static BANDS: [[AdjacencyEntry; 4]; 6] = {
    let mut bands = [[entry(U, Row, true, false); 4]; 6];

    bands[U as usize] = [
        entry(B, Row, true, false),
        entry(R, Row, true, false),
        entry(F, Row, true, false),
        entry(L, Row, true, false),
    ];
    bands[L as usize] = [
        entry(U, Col, true, false),
        entry(F, Col, true, false),
        entry(D, Col, true, false),
        entry(B, Col, false, true),
    ];
    bands[F as usize] = [
        entry(U, Row, false, true),
        entry(R, Col, true, true),
        entry(D, Row, true, false),
        entry(L, Col, false, false),
    ];
    bands[R as usize] = [
        entry(U, Col, false, true),
        entry(B, Col, true, false),
        entry(D, Col, false, true),
        entry(F, Col, false, true),
    ];
    bands[B as usize] = [
        entry(U, Row, true, true),
        entry(L, Col, true, false),
        entry(D, Row, false, false),
        entry(R, Col, false, true),
    ];
    bands[D as usize] = [
        entry(F, Row, false, false),
        entry(R, Row, false, false),
        entry(B, Row, false, false),
        entry(L, Row, false, false),
    ];

    bands
};

/// The four edges turned together with `face`, in clockwise cycle order.
#[must_use]
pub fn band(face: Face) -> &'static [AdjacencyEntry; 4] {
    &BANDS[face as usize]
}

/// The whole table, keyed by reference face.
#[must_use]
pub fn bands() -> Faces<&'static [AdjacencyEntry; 4]> {
    Faces::from_fn(band)
}

#[cfg(test)]
mod tests {
    use super::{band, bands};
    use crate::face::Face;
    use itertools::Itertools;

    #[test]
    fn band_skips_own_axis() {
        for (face, entries) in bands().iter() {
            let neighbours = entries.iter().map(|entry| entry.face).collect_vec();

            assert!(!neighbours.contains(&face));
            assert!(!neighbours.contains(&face.opposite()));
            assert!(neighbours.iter().all_unique());
        }
    }

    #[test]
    fn opposite_bands_share_edge_kinds() {
        for face in Face::ALL {
            let kinds = |face: Face| {
                band(face)
                    .iter()
                    .map(|entry| (entry.face, entry.kind))
                    .sorted_by_key(|(face, _)| *face as usize)
                    .collect_vec()
            };

            assert_eq!(kinds(face), kinds(face.opposite()));
        }
    }
}
