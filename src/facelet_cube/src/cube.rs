use crate::{
    CubeError,
    face::{Face, Facelet},
    rotation::rotate,
    state::CubeState,
};
use log::debug;
use std::borrow::Cow;

/// Whether a rotation builds a new cube or replaces the receiver's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyMode {
    /// Return a new cube and leave the receiver as it was.
    #[default]
    Copy,
    /// Swap the receiver's state for the rotated one and return the
    /// receiver.
    InPlace,
}

/// A cube holding one current state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    state: CubeState,
}

impl Cube {
    /// Create a solved cube of side `size`.
    ///
    /// # Errors
    ///
    /// If `size` is zero or too large to number every facelet.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        Ok(Cube {
            state: CubeState::solved(size)?,
        })
    }

    /// Create a cube of side `size` from an explicit flat sequence.
    ///
    /// # Errors
    ///
    /// If `size` is invalid or `flat` does not hold 6·size² facelets.
    pub fn from_flat(size: usize, flat: impl Into<Box<[Facelet]>>) -> Result<Self, CubeError> {
        Ok(Cube {
            state: CubeState::from_flat(size, flat)?,
        })
    }

    #[must_use]
    pub fn from_state(state: CubeState) -> Self {
        Cube { state }
    }

    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> CubeState {
        self.state
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.state.size()
    }

    #[must_use]
    pub fn flat(&self) -> &[Facelet] {
        self.state.flat()
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[Facelet] {
        self.state.face(face)
    }

    /// The facelets of the face with raw id `id` (see `Face` for the order).
    ///
    /// # Errors
    ///
    /// If `id` is not one of the six face ids.
    pub fn face_by_id(&self, id: usize) -> Result<&[Facelet], CubeError> {
        Ok(self.face(Face::try_from(id)?))
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// A new cube with `face` turned, leaving `self` unchanged.
    #[must_use]
    pub fn rotated(&self, face: Face) -> Cube {
        Cube {
            state: rotate(&self.state, face),
        }
    }

    /// Turn `face` on this cube. The new state is fully built before it
    /// replaces the current one.
    pub fn rotate_in_place(&mut self, face: Face) -> &mut Self {
        let next = rotate(&self.state, face);
        debug!("Replacing cube state after turning {face}");
        self.state = next;
        self
    }

    /// Turn `face`, either into a new cube or on `self`, depending on
    /// `mode`. An in place turn borrows back the receiver.
    pub fn rotate(&mut self, face: Face, mode: ApplyMode) -> Cow<'_, Cube> {
        match mode {
            ApplyMode::Copy => Cow::Owned(self.rotated(face)),
            ApplyMode::InPlace => Cow::Borrowed(self.rotate_in_place(face)),
        }
    }

    /// Like `Cube::rotate`, for a raw face id.
    ///
    /// # Errors
    ///
    /// If `id` is not one of the six face ids. The cube is not changed.
    pub fn rotate_by_id(&mut self, id: usize, mode: ApplyMode) -> Result<Cow<'_, Cube>, CubeError> {
        let face = Face::try_from(id)?;
        Ok(self.rotate(face, mode))
    }

    pub fn rotate_u(&mut self, mode: ApplyMode) -> Cow<'_, Cube> {
        self.rotate(Face::U, mode)
    }

    pub fn rotate_d(&mut self, mode: ApplyMode) -> Cow<'_, Cube> {
        self.rotate(Face::D, mode)
    }

    pub fn rotate_r(&mut self, mode: ApplyMode) -> Cow<'_, Cube> {
        self.rotate(Face::R, mode)
    }

    pub fn rotate_l(&mut self, mode: ApplyMode) -> Cow<'_, Cube> {
        self.rotate(Face::L, mode)
    }

    pub fn rotate_f(&mut self, mode: ApplyMode) -> Cow<'_, Cube> {
        self.rotate(Face::F, mode)
    }

    pub fn rotate_b(&mut self, mode: ApplyMode) -> Cow<'_, Cube> {
        self.rotate(Face::B, mode)
    }
}

impl From<CubeState> for Cube {
    fn from(state: CubeState) -> Self {
        Cube::from_state(state)
    }
}
