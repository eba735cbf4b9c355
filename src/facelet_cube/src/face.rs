//! Face identities and the index arithmetic every rotation goes through.
//!
//! The flat sequence holds six row-major blocks of `size * size` facelets,
//! one per face in `Face` order. Faces are oriented as seen from the front:
//! L, R and B are reached by spinning the cube about its vertical axis, U
//! and D by tilting it toward or away from the viewer. So U's last row and
//! D's first row border F, and row 0 of every side face borders U.

use crate::CubeError;
use std::fmt;

/// The identity of a single sticker. In the solved state the facelet at
/// flat index `k` is `k`.
pub type Facelet = u32;

/// One of the six outer faces. The discriminant is the face's block index
/// in the flat sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    U = 0,
    D = 1,
    R = 2,
    L = 3,
    F = 4,
    B = 5,
}

impl Face {
    /// All faces in block order.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::R, Face::L, Face::F, Face::B];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The face that shares no facelets with a turn of `self`.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::R => Face::L,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}

impl TryFrom<usize> for Face {
    type Error = CubeError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        Face::ALL
            .get(id)
            .copied()
            .ok_or(CubeError::InvalidFaceId(id))
    }
}

impl TryFrom<u8> for Face {
    type Error = CubeError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Face::try_from(usize::from(id))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::U => "U",
            Face::D => "D",
            Face::R => "R",
            Face::L => "L",
            Face::F => "F",
            Face::B => "B",
        };
        f.write_str(name)
    }
}

/// A (face, row, column) address on a cube. Rows and columns are
/// 0-indexed and must be less than the cube size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceletCoord {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl FaceletCoord {
    #[must_use]
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        FaceletCoord { face, row, col }
    }

    /// The flat index of this coordinate on a cube of side `size`.
    #[must_use]
    pub const fn flat_index(self, size: usize) -> usize {
        facelet_index(size, self.face, self.row, self.col)
    }
}

/// Index of the first facelet of `face` in the flat sequence.
#[must_use]
pub const fn face_offset(size: usize, face: Face) -> usize {
    size * size * face.index()
}

/// Index of the facelet at (`row`, `col`) of `face` in the flat sequence.
#[must_use]
pub const fn facelet_index(size: usize, face: Face, row: usize, col: usize) -> usize {
    debug_assert!(row < size && col < size);
    face_offset(size, face) + row * size + col
}
